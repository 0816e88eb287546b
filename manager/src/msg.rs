//! Message types for the bridge manager contract
//!
//! This module defines all messages for instantiation, execution, and queries,
//! plus the withdrawal claim parameter block shared between execution and the
//! leaf-hash query.

use common::asset::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128, Uint256};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Access control contract consulted for role checks
    pub acl: String,
    /// Recipient of collected fees
    pub treasurer: String,
    /// Denomination fees are paid in (e.g., "uluna")
    pub fee_denom: String,
    /// Flat fee charged on each deposit
    pub deposit_fee: Uint128,
    /// Flat fee charged on each withdrawal
    pub withdraw_fee: Uint128,
}

// ============================================================================
// Withdrawal Claim
// ============================================================================

/// Parameters of a withdrawal claim
///
/// These seven fields are serialized into the canonical 140-byte encoding and
/// hashed to form the merkle leaf. Submitting them with a valid proof releases
/// the mapped asset to `dest_wallet`.
#[cw_serde]
pub struct WithdrawParams {
    /// Source-chain batch index
    pub batch_index: u64,
    /// Sub-index within the batch
    pub sub_index: u64,
    /// Amount to release (uint256, in source-chain units)
    pub amount: Uint256,
    /// Destination wallet on this chain (bech32 account address)
    pub dest_wallet: String,
    /// Source transaction hash (32 bytes)
    pub src_tx_hash: Binary,
    /// Event index within the source transaction
    pub src_event_index: u64,
    /// Source token identifier (32 bytes)
    pub token_id: Binary,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Root Window
    // ========================================================================
    /// Publish a new merkle root, rotating the two-slot window
    ///
    /// Authorization: merkle updater role
    ///
    /// The current root becomes the previous root; proofs against the root
    /// displaced out of the window stop verifying.
    SetMerkleRoot {
        /// New root (32 bytes)
        root: Binary,
    },

    // ========================================================================
    // Withdrawals
    // ========================================================================
    /// Claim a withdrawal proven against the root window
    ///
    /// Authorization: Anyone (funds must cover the flat withdraw fee)
    ///
    /// Verifies the proof against the current root, then the previous root,
    /// marks the exit processed and instructs the vault for the mapped token
    /// type to release the asset to the destination wallet.
    Withdraw {
        /// Claim parameters committed to by the merkle leaf
        params: WithdrawParams,
        /// Sibling hashes, deepest level first (32 bytes each)
        proof: Vec<Binary>,
    },

    // ========================================================================
    // Deposits
    // ========================================================================
    /// Deposit a mapped asset for bridging to the source chain
    ///
    /// Authorization: Anyone (funds must cover the flat deposit fee)
    ///
    /// Native assets ride along as attached funds; CW20 assets are pulled via
    /// an allowance set beforehand. The asset lands in the vault registered
    /// for its token type and the emitted event drives the relayer.
    Deposit {
        /// Asset being deposited (must be mapped and enabled)
        asset: AssetInfo,
        /// Amount to deposit
        amount: Uint128,
        /// Destination wallet on the source chain (0x hex)
        dest_wallet: String,
    },

    // ========================================================================
    // Registry Management
    // ========================================================================
    /// Register the vault holding assets of a token type
    ///
    /// Authorization: admin role
    RegisterVault {
        /// Token type (32 bytes)
        token_type: Binary,
        /// Vault contract address
        vault: String,
    },

    /// Map a source token identifier to a local asset
    ///
    /// Authorization: mapper role
    ///
    /// The token type must already have a registered vault. Neither the token
    /// identifier nor the asset may be mapped yet.
    MapToken {
        /// Source token identifier (32 bytes)
        token_id: Binary,
        /// Local asset released on withdrawal
        asset: AssetInfo,
        /// Token type selecting the vault (32 bytes)
        token_type: Binary,
    },

    /// Repoint an existing token mapping at a different asset or token type
    ///
    /// Authorization: mapper role
    RemapToken {
        /// Source token identifier (32 bytes, must be mapped)
        token_id: Binary,
        /// New local asset
        asset: AssetInfo,
        /// New token type (32 bytes)
        token_type: Binary,
    },

    /// Disable a token mapping
    ///
    /// Authorization: mapper role
    ///
    /// The mapping stays on record but stops matching deposits and
    /// withdrawals; its asset becomes free to map elsewhere.
    CleanMapToken {
        /// Source token identifier (32 bytes)
        token_id: Binary,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Set the flat deposit fee
    ///
    /// Authorization: admin role
    SetDepositFee {
        /// New fee in the fee denomination
        fee: Uint128,
    },

    /// Set the flat withdraw fee
    ///
    /// Authorization: admin role
    SetWithdrawFee {
        /// New fee in the fee denomination
        fee: Uint128,
    },

    /// Change the fee recipient
    ///
    /// Authorization: admin role
    SetTreasurer {
        /// New treasurer address
        treasurer: String,
    },

    /// Pause or unpause deposits and withdrawals
    ///
    /// Authorization: admin role
    ///
    /// Root publication and registry management stay available while paused.
    SetPaused {
        /// Desired paused state
        paused: bool,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns both slots of the merkle root window
    #[returns(MerkleRootsResponse)]
    MerkleRoots {},

    /// Check whether an exit has already been claimed
    #[returns(IsProcessedResponse)]
    IsProcessed {
        /// 32-byte leaf hash
        leaf_hash: Binary,
    },

    /// Compute the leaf hash for claim parameters without submitting them
    #[returns(LeafHashResponse)]
    LeafHash {
        /// Claim parameters to hash
        params: WithdrawParams,
    },

    /// Returns the mapping for a source token identifier
    #[returns(Option<TokenMappingResponse>)]
    TokenMapping {
        /// Source token identifier (32 bytes)
        token_id: Binary,
    },

    /// List token mappings with cursor-based pagination
    #[returns(TokenMappingsResponse)]
    TokenMappings {
        /// Cursor: token identifier of the last item from the previous page
        start_after: Option<Binary>,
        /// Max entries to return (default 10, max 50)
        limit: Option<u32>,
    },

    /// Reverse lookup from a local asset to its source token identifier
    #[returns(TokenIdResponse)]
    TokenId {
        /// Local asset to look up
        asset: AssetInfo,
    },

    /// Returns the vault registered for a token type
    #[returns(VaultResponse)]
    Vault {
        /// Token type (32 bytes)
        token_type: Binary,
    },

    /// Returns the current deposit nonce
    #[returns(DepositNonceResponse)]
    DepositNonce {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub acl: Addr,
    pub treasurer: Addr,
    pub fee_denom: String,
    pub deposit_fee: Uint128,
    pub withdraw_fee: Uint128,
    pub paused: bool,
}

#[cw_serde]
pub struct MerkleRootsResponse {
    /// Most recently published root (32 bytes)
    pub current_root: Binary,
    /// Root the current one replaced (32 bytes)
    pub previous_root: Binary,
    /// Number of roots published since instantiation
    pub sequence: u64,
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub leaf_hash: Binary,
    pub processed: bool,
}

#[cw_serde]
pub struct LeafHashResponse {
    /// keccak256 of the canonical 140-byte claim encoding
    pub leaf_hash: Binary,
}

#[cw_serde]
pub struct TokenMappingResponse {
    pub token_id: Binary,
    pub asset: AssetInfo,
    pub token_type: Binary,
    pub enabled: bool,
}

#[cw_serde]
pub struct TokenMappingsResponse {
    pub mappings: Vec<TokenMappingResponse>,
}

#[cw_serde]
pub struct TokenIdResponse {
    /// Token identifier the asset is mapped from, if any
    pub token_id: Option<Binary>,
}

#[cw_serde]
pub struct VaultResponse {
    pub token_type: Binary,
    /// Registered vault address, if any
    pub vault: Option<Addr>,
}

#[cw_serde]
pub struct DepositNonceResponse {
    pub nonce: u64,
}
