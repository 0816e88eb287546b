//! Bridge Manager Contract - Merkle-Verified Cross-Chain Withdrawals
//!
//! This contract is the destination-chain half of a token bridge. Exit events
//! on the source chain are batched off-chain into a merkle tree; users claim
//! their withdrawals here by proving membership against a published root.
//!
//! # Withdrawal Flow
//! 1. The relayer batches source-chain exit events into a merkle tree
//! 2. The merkle updater publishes the root into a two-slot window
//! 3. A user submits the seven claim parameters plus a proof
//! 4. The contract verifies against the current root, then the previous one
//! 5. The exit is marked processed and the vault releases the mapped asset
//!
//! # Deposit Flow
//! 1. A user deposits a mapped asset (native attached, CW20 via allowance)
//! 2. The asset lands in the vault registered for its token type
//! 3. The relayer reads the deposit event and credits the source chain
//!
//! # Security
//! - Commutative sorted-pair merkle hashing with bounded proof depth
//! - Two-root window tolerates one rotation between proof and claim
//! - Exits are marked processed exactly once and never unmarked
//! - Marking and release share a transaction, so a failed release reverts
//! - Role-gated root publication and registry management
//! - Emergency pause for user-facing operations

pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod merkle;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{claim_leaf_hash, keccak256};
pub use crate::merkle::{hash_pair, verify};
