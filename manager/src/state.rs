//! State definitions for the bridge manager contract
//!
//! This module defines the storage layout: the two-slot merkle root window,
//! the processed-exit set, the token registry and the vault directory.

use common::asset::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::hash::keccak256;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Access control contract queried for role membership
    pub acl: Addr,
    /// Recipient of collected flat fees
    pub treasurer: Addr,
    /// Denomination fees are paid in
    pub fee_denom: String,
    /// Flat fee charged on each deposit
    pub deposit_fee: Uint128,
    /// Flat fee charged on each withdrawal
    pub withdraw_fee: Uint128,
    /// Whether user-facing operations are currently paused
    pub paused: bool,
}

// ============================================================================
// Root Window
// ============================================================================

/// Two-slot window of accepted merkle roots
///
/// Publishing a new root shifts the current root into the previous slot, so a
/// proof built against the most recent prior root stays valid for exactly one
/// more rotation. Both slots start zeroed; the all-zero root matches no
/// honestly built tree.
#[cw_serde]
pub struct RootWindow {
    /// Most recently published root
    pub current_root: [u8; 32],
    /// Root the current one replaced
    pub previous_root: [u8; 32],
    /// Number of roots published since instantiation
    pub sequence: u64,
}

impl RootWindow {
    /// Shift in a new current root, demoting the old current to previous
    ///
    /// Both slots change together; no intermediate state is observable.
    pub fn rotate(&mut self, new_root: [u8; 32]) {
        self.previous_root = self.current_root;
        self.current_root = new_root;
        self.sequence += 1;
    }

    /// Whether `root` occupies either slot of the window
    pub fn contains(&self, root: &[u8; 32]) -> bool {
        self.current_root == *root || self.previous_root == *root
    }
}

// ============================================================================
// Token Registry
// ============================================================================

/// Mapping from a source-chain token to its local asset
#[cw_serde]
pub struct TokenMapping {
    /// Local asset released when this token is withdrawn
    pub asset: AssetInfo,
    /// Token type selecting the vault that holds the asset
    pub token_type: [u8; 32],
    /// Whether the mapping is active
    pub enabled: bool,
}

// ============================================================================
// Roles
// ============================================================================

/// Admin role identifier (all zeroes, mirroring the source chain ACL)
pub const DEFAULT_ADMIN_ROLE: [u8; 32] = [0u8; 32];

/// Role allowed to publish merkle roots
pub fn merkle_updater_role() -> [u8; 32] {
    keccak256(b"MERKLE_UPDATER")
}

/// Role allowed to manage token mappings
pub fn mapper_role() -> [u8; 32] {
    keccak256(b"MAPPER_ROLE")
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-manager";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// The two-slot merkle root window
pub const ROOT_WINDOW: Item<RootWindow> = Item::new("root_window");

/// Processed exits, keyed by leaf hash
/// Key: 32-byte leaf hash as &[u8], Value: true once claimed
///
/// Entries are set exactly once and never removed.
pub const PROCESSED_EXITS: Map<&[u8], bool> = Map::new("processed_exits");

/// Token registry
/// Key: 32-byte source token identifier as &[u8], Value: TokenMapping
pub const TOKEN_MAP: Map<&[u8], TokenMapping> = Map::new("token_map");

/// Reverse index from local asset to source token identifier
/// Key: asset key string, Value: 32-byte token identifier
pub const ASSET_TO_TOKEN: Map<&str, [u8; 32]> = Map::new("asset_to_token");

/// Vault directory
/// Key: 32-byte token type as &[u8], Value: vault contract address
pub const VAULTS: Map<&[u8], Addr> = Map::new("vaults");

/// Deposit counter, incremented on every accepted deposit
pub const DEPOSIT_NONCE: Item<u64> = Item::new("deposit_nonce");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_window_rotation() {
        let mut window = RootWindow {
            current_root: [0u8; 32],
            previous_root: [0u8; 32],
            sequence: 0,
        };

        let root_a = [1u8; 32];
        let root_b = [2u8; 32];

        window.rotate(root_a);
        assert_eq!(window.current_root, root_a);
        assert_eq!(window.previous_root, [0u8; 32]);
        assert_eq!(window.sequence, 1);

        window.rotate(root_b);
        assert_eq!(window.current_root, root_b);
        assert_eq!(window.previous_root, root_a);
        assert_eq!(window.sequence, 2);

        assert!(window.contains(&root_a));
        assert!(window.contains(&root_b));
        assert!(!window.contains(&[0u8; 32]));
    }

    #[test]
    fn test_role_identifiers_distinct() {
        assert_ne!(merkle_updater_role(), DEFAULT_ADMIN_ROLE);
        assert_ne!(mapper_role(), DEFAULT_ADMIN_ROLE);
        assert_ne!(merkle_updater_role(), mapper_role());
    }
}
