//! Execute handlers for the bridge manager contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `root` - Merkle root publication
//! - `withdraw` - Proof-verified withdrawal claims
//! - `deposit` - Deposits bridged out to the source chain
//! - `registry` - Token mapping and vault management
//! - `admin` - Fee, treasurer, and pause operations

mod admin;
mod deposit;
mod registry;
mod root;
mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use registry::*;
pub use root::*;
pub use withdraw::*;

use common::acl::{AclQueryMsg, HasRoleResponse};
use cosmwasm_std::{Addr, Binary, Coin, QuerierWrapper, Uint128};

use crate::error::ContractError;

/// Check with the ACL contract that `addr` holds `role`
pub fn ensure_role(
    querier: &QuerierWrapper,
    acl: &Addr,
    role: [u8; 32],
    addr: &Addr,
) -> Result<(), ContractError> {
    let resp: HasRoleResponse = querier.query_wasm_smart(
        acl,
        &AclQueryMsg::HasRole {
            role: Binary::from(role.as_slice()),
            addr: addr.to_string(),
        },
    )?;

    if !resp.has_role {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Interpret a Binary as a fixed 32-byte value
pub fn as_bytes32(data: &Binary) -> Result<[u8; 32], ContractError> {
    data.as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: data.len() })
}

/// Total amount of `denom` among the attached funds
pub fn sent_amount(funds: &[Coin], denom: &str) -> Uint128 {
    funds
        .iter()
        .filter(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .sum()
}

/// Reject funds in any denomination outside `allowed`
///
/// Stray denominations would otherwise be silently absorbed by the contract.
pub fn ensure_only_denoms(funds: &[Coin], allowed: &[&str]) -> Result<(), ContractError> {
    for coin in funds {
        if !allowed.contains(&coin.denom.as_str()) {
            return Err(ContractError::InvalidAmount {
                reason: format!("unexpected denomination: {}", coin.denom),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coin;

    #[test]
    fn test_sent_amount_sums_matching_denom() {
        let funds = vec![coin(100, "uluna"), coin(50, "uusd"), coin(25, "uluna")];
        assert_eq!(sent_amount(&funds, "uluna"), Uint128::new(125));
        assert_eq!(sent_amount(&funds, "uusd"), Uint128::new(50));
        assert_eq!(sent_amount(&funds, "ukrw"), Uint128::zero());
    }

    #[test]
    fn test_ensure_only_denoms() {
        let funds = vec![coin(100, "uluna"), coin(50, "uusd")];
        assert!(ensure_only_denoms(&funds, &["uluna", "uusd"]).is_ok());
        assert!(ensure_only_denoms(&funds, &["uluna"]).is_err());
        assert!(ensure_only_denoms(&[], &["uluna"]).is_ok());
    }

    #[test]
    fn test_as_bytes32_length_check() {
        let ok = Binary::from([7u8; 32].as_slice());
        assert_eq!(as_bytes32(&ok).unwrap(), [7u8; 32]);

        let short = Binary::from([7u8; 20].as_slice());
        assert_eq!(
            as_bytes32(&short).unwrap_err(),
            ContractError::InvalidHashLength { got: 20 }
        );
    }
}
