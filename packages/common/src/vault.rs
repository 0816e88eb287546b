//! Vault collaborator interface.
//!
//! Vault contracts hold the bridged liquidity. The manager never touches
//! custody balances directly; it instructs the vault registered for a token
//! type to pay out. A vault error aborts the whole withdrawal transaction.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::asset::AssetInfo;

/// Execute interface implemented by vault contracts
#[cw_serde]
pub enum VaultExecuteMsg {
    /// Release custody funds to a recipient on this chain
    ///
    /// Authorization: bridge manager only (enforced by the vault)
    Release {
        /// Asset to pay out
        asset: AssetInfo,
        /// Recipient address on this chain
        recipient: String,
        /// Amount in the asset's smallest unit
        amount: Uint128,
    },
}
