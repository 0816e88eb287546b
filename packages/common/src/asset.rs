//! Asset identification for native coins and CW20 tokens.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Api, StdError, StdResult};

/// A local asset: either a native coin denom or a CW20 token contract
#[cw_serde]
pub enum AssetInfo {
    /// Native coin (e.g. "uluna")
    Native {
        /// Denomination string
        denom: String,
    },
    /// CW20 token
    Cw20 {
        /// Token contract address
        contract_addr: String,
    },
}

impl AssetInfo {
    /// Canonical storage key for this asset ("native:<denom>" / "cw20:<addr>")
    pub fn key(&self) -> String {
        match self {
            AssetInfo::Native { denom } => format!("native:{}", denom),
            AssetInfo::Cw20 { contract_addr } => format!("cw20:{}", contract_addr),
        }
    }

    /// Validate the asset descriptor against the host api
    pub fn validate(&self, api: &dyn Api) -> StdResult<()> {
        match self {
            AssetInfo::Native { denom } => {
                if denom.is_empty() {
                    return Err(StdError::generic_err("Native denom must not be empty"));
                }
                Ok(())
            }
            AssetInfo::Cw20 { contract_addr } => {
                api.addr_validate(contract_addr)?;
                Ok(())
            }
        }
    }

    /// Whether this asset is a native coin
    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }
}
