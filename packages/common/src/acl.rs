//! Access-control collaborator interface.
//!
//! Role checks are delegated to an external contract holding the role table.
//! Role identifiers are 32-byte values: the all-zero id is the admin role,
//! named roles are the keccak256 hash of the role name.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

/// Query interface implemented by the access-control contract
#[cw_serde]
#[derive(QueryResponses)]
pub enum AclQueryMsg {
    /// Check whether an address holds a role
    #[returns(HasRoleResponse)]
    HasRole {
        /// 32-byte role identifier
        role: Binary,
        /// Address to check
        addr: String,
    },
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
