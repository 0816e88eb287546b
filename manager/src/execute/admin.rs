//! Fee, treasurer, and pause operations.
//!
//! All handlers here require the admin role on the ACL contract.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::ensure_role;
use crate::state::{CONFIG, DEFAULT_ADMIN_ROLE};

/// Execute handler for setting the flat deposit fee
pub fn execute_set_deposit_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, DEFAULT_ADMIN_ROLE, &info.sender)?;

    config.deposit_fee = fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_deposit_fee")
        .add_attribute("fee", fee.to_string()))
}

/// Execute handler for setting the flat withdraw fee
pub fn execute_set_withdraw_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, DEFAULT_ADMIN_ROLE, &info.sender)?;

    config.withdraw_fee = fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_withdraw_fee")
        .add_attribute("fee", fee.to_string()))
}

/// Execute handler for changing the fee recipient
pub fn execute_set_treasurer(
    deps: DepsMut,
    info: MessageInfo,
    treasurer: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, DEFAULT_ADMIN_ROLE, &info.sender)?;

    let treasurer = deps.api.addr_validate(&treasurer)?;
    config.treasurer = treasurer.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_treasurer")
        .add_attribute("treasurer", treasurer))
}

/// Execute handler for pausing or unpausing user operations
///
/// Pause gates deposits and withdrawals. Root publication and registry
/// management stay live so the window and mappings can be corrected while
/// users are locked out.
pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, DEFAULT_ADMIN_ROLE, &info.sender)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_paused")
        .add_attribute("paused", paused.to_string()))
}
