//! Bridge Manager Contract - Entry Points
//!
//! This contract verifies merkle-proven withdrawals from the source chain and
//! records deposits heading the other way. The implementation is modularized
//! into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_clean_map_token, execute_deposit, execute_map_token, execute_register_vault,
    execute_remap_token, execute_set_deposit_fee, execute_set_merkle_root, execute_set_paused,
    execute_set_treasurer, execute_set_withdraw_fee, execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_deposit_nonce, query_is_processed, query_leaf_hash, query_merkle_roots,
    query_token_id, query_token_mapping, query_token_mappings, query_vault,
};
use crate::state::{
    Config, RootWindow, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEPOSIT_NONCE, ROOT_WINDOW,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let acl = deps.api.addr_validate(&msg.acl)?;
    let treasurer = deps.api.addr_validate(&msg.treasurer)?;

    if msg.fee_denom.is_empty() {
        return Err(StdError::generic_err("fee_denom must not be empty").into());
    }

    let config = Config {
        acl,
        treasurer,
        fee_denom: msg.fee_denom,
        deposit_fee: msg.deposit_fee,
        withdraw_fee: msg.withdraw_fee,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    // Both root slots start zeroed; the zero root matches no real tree, so
    // nothing is claimable until the first publication
    ROOT_WINDOW.save(
        deps.storage,
        &RootWindow {
            current_root: [0u8; 32],
            previous_root: [0u8; 32],
            sequence: 0,
        },
    )?;

    DEPOSIT_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("acl", config.acl)
        .add_attribute("treasurer", config.treasurer)
        .add_attribute("fee_denom", config.fee_denom)
        .add_attribute("deposit_fee", config.deposit_fee.to_string())
        .add_attribute("withdraw_fee", config.withdraw_fee.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Root window
        ExecuteMsg::SetMerkleRoot { root } => execute_set_merkle_root(deps, info, root),

        // Withdrawals
        ExecuteMsg::Withdraw { params, proof } => execute_withdraw(deps, info, params, proof),

        // Deposits
        ExecuteMsg::Deposit {
            asset,
            amount,
            dest_wallet,
        } => execute_deposit(deps, info, asset, amount, dest_wallet),

        // Registry management
        ExecuteMsg::RegisterVault { token_type, vault } => {
            execute_register_vault(deps, info, token_type, vault)
        }
        ExecuteMsg::MapToken {
            token_id,
            asset,
            token_type,
        } => execute_map_token(deps, info, token_id, asset, token_type),
        ExecuteMsg::RemapToken {
            token_id,
            asset,
            token_type,
        } => execute_remap_token(deps, info, token_id, asset, token_type),
        ExecuteMsg::CleanMapToken { token_id } => execute_clean_map_token(deps, info, token_id),

        // Admin operations
        ExecuteMsg::SetDepositFee { fee } => execute_set_deposit_fee(deps, info, fee),
        ExecuteMsg::SetWithdrawFee { fee } => execute_set_withdraw_fee(deps, info, fee),
        ExecuteMsg::SetTreasurer { treasurer } => execute_set_treasurer(deps, info, treasurer),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MerkleRoots {} => to_json_binary(&query_merkle_roots(deps)?),
        QueryMsg::IsProcessed { leaf_hash } => {
            to_json_binary(&query_is_processed(deps, leaf_hash)?)
        }
        QueryMsg::LeafHash { params } => to_json_binary(&query_leaf_hash(params)?),
        QueryMsg::TokenMapping { token_id } => {
            to_json_binary(&query_token_mapping(deps, token_id)?)
        }
        QueryMsg::TokenMappings { start_after, limit } => {
            to_json_binary(&query_token_mappings(deps, start_after, limit)?)
        }
        QueryMsg::TokenId { asset } => to_json_binary(&query_token_id(deps, asset)?),
        QueryMsg::Vault { token_type } => to_json_binary(&query_vault(deps, token_type)?),
        QueryMsg::DepositNonce {} => to_json_binary(&query_deposit_nonce(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
