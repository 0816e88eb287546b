//! Error types for the bridge manager contract.
//!
//! Withdrawal processing distinguishes claim-shape failures, proof failures,
//! replay and release failures so callers and off-chain tooling can react to
//! each without string matching.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller does not hold the required role")]
    Unauthorized,

    #[error("Contract is paused")]
    ContractPaused,

    // ========================================================================
    // Withdrawal Errors
    // ========================================================================

    #[error("Invalid claim: {reason}")]
    InvalidClaim { reason: String },

    #[error("Invalid proof: claim is not a member of the current or previous root")]
    InvalidProof,

    #[error("Already processed: this exit has been claimed before")]
    AlreadyProcessed,

    #[error("Release failed: no vault registered for token type {token_type}")]
    ReleaseFailed { token_type: String },

    #[error("Amount does not fit the release denomination")]
    AmountOverflow,

    // ========================================================================
    // Fee Errors
    // ========================================================================

    #[error("Insufficient fee: required {required}, sent {sent}")]
    InsufficientFee { required: Uint128, sent: Uint128 },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Token already mapped: {token_id}")]
    TokenAlreadyMapped { token_id: String },

    #[error("Token not mapped: {token_id}")]
    TokenNotMapped { token_id: String },

    #[error("Asset already mapped to token {token_id}")]
    AssetAlreadyMapped { token_id: String },

    #[error("No vault registered for token type {token_type}")]
    VaultNotRegistered { token_type: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("Invalid destination: {reason}")]
    InvalidDestination { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}
