//! Common - Shared Types and Collaborator Interfaces
//!
//! This package provides shared type definitions and the message interfaces
//! of the external collaborators (vaults, access control) consumed by the
//! bridge manager contract.

pub mod acl;
pub mod asset;
pub mod vault;

pub use acl::{AclQueryMsg, HasRoleResponse};
pub use asset::AssetInfo;
pub use vault::VaultExecuteMsg;
