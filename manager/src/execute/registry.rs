//! Token mapping and vault management.
//!
//! The registry ties the three identifier spaces together: source token
//! identifiers, local assets and the vaults that custody them. Mappings are
//! created by the mapper role; vaults are registered by the admin.

use common::asset::AssetInfo;
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::{as_bytes32, ensure_role};
use crate::hash::bytes32_to_hex;
use crate::state::{
    mapper_role, TokenMapping, ASSET_TO_TOKEN, CONFIG, DEFAULT_ADMIN_ROLE, TOKEN_MAP, VAULTS,
};

/// Execute handler for registering the vault of a token type
///
/// Re-registering a token type points it at the new vault; mappings pick the
/// change up on their next release.
pub fn execute_register_vault(
    deps: DepsMut,
    info: MessageInfo,
    token_type: Binary,
    vault: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, DEFAULT_ADMIN_ROLE, &info.sender)?;

    let token_type = as_bytes32(&token_type)?;
    let vault = deps.api.addr_validate(&vault)?;

    VAULTS.save(deps.storage, &token_type, &vault)?;

    Ok(Response::new()
        .add_attribute("method", "register_vault")
        .add_attribute("token_type", bytes32_to_hex(&token_type))
        .add_attribute("vault", vault))
}

/// Execute handler for mapping a source token to a local asset
pub fn execute_map_token(
    deps: DepsMut,
    info: MessageInfo,
    token_id: Binary,
    asset: AssetInfo,
    token_type: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, mapper_role(), &info.sender)?;

    let token_id = as_bytes32(&token_id)?;
    let token_type = as_bytes32(&token_type)?;
    asset.validate(deps.api)?;

    if TOKEN_MAP.has(deps.storage, &token_id) {
        return Err(ContractError::TokenAlreadyMapped {
            token_id: bytes32_to_hex(&token_id),
        });
    }

    let asset_key = asset.key();
    if let Some(existing) = ASSET_TO_TOKEN.may_load(deps.storage, &asset_key)? {
        return Err(ContractError::AssetAlreadyMapped {
            token_id: bytes32_to_hex(&existing),
        });
    }

    // A mapping without a vault would strand every claim against it
    if !VAULTS.has(deps.storage, &token_type) {
        return Err(ContractError::VaultNotRegistered {
            token_type: bytes32_to_hex(&token_type),
        });
    }

    TOKEN_MAP.save(
        deps.storage,
        &token_id,
        &TokenMapping {
            asset: asset.clone(),
            token_type,
            enabled: true,
        },
    )?;
    ASSET_TO_TOKEN.save(deps.storage, &asset_key, &token_id)?;

    Ok(Response::new()
        .add_attribute("method", "map_token")
        .add_attribute("token_id", bytes32_to_hex(&token_id))
        .add_attribute("asset", asset_key)
        .add_attribute("token_type", bytes32_to_hex(&token_type)))
}

/// Execute handler for repointing an existing token mapping
///
/// Also the way to re-enable a mapping disabled by CleanMapToken.
pub fn execute_remap_token(
    deps: DepsMut,
    info: MessageInfo,
    token_id: Binary,
    asset: AssetInfo,
    token_type: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, mapper_role(), &info.sender)?;

    let token_id = as_bytes32(&token_id)?;
    let token_type = as_bytes32(&token_type)?;
    asset.validate(deps.api)?;

    let existing =
        TOKEN_MAP
            .may_load(deps.storage, &token_id)?
            .ok_or(ContractError::TokenNotMapped {
                token_id: bytes32_to_hex(&token_id),
            })?;

    let asset_key = asset.key();
    if let Some(other) = ASSET_TO_TOKEN.may_load(deps.storage, &asset_key)? {
        if other != token_id {
            return Err(ContractError::AssetAlreadyMapped {
                token_id: bytes32_to_hex(&other),
            });
        }
    }

    if !VAULTS.has(deps.storage, &token_type) {
        return Err(ContractError::VaultNotRegistered {
            token_type: bytes32_to_hex(&token_type),
        });
    }

    // Drop the old reverse entry unless a clean already removed it or it now
    // belongs to another token
    let old_key = existing.asset.key();
    if old_key != asset_key {
        if let Some(owner) = ASSET_TO_TOKEN.may_load(deps.storage, &old_key)? {
            if owner == token_id {
                ASSET_TO_TOKEN.remove(deps.storage, &old_key);
            }
        }
    }

    TOKEN_MAP.save(
        deps.storage,
        &token_id,
        &TokenMapping {
            asset: asset.clone(),
            token_type,
            enabled: true,
        },
    )?;
    ASSET_TO_TOKEN.save(deps.storage, &asset_key, &token_id)?;

    Ok(Response::new()
        .add_attribute("method", "remap_token")
        .add_attribute("token_id", bytes32_to_hex(&token_id))
        .add_attribute("asset", asset_key)
        .add_attribute("token_type", bytes32_to_hex(&token_type)))
}

/// Execute handler for disabling a token mapping
///
/// The record stays in place so the token identifier cannot be silently
/// re-mapped, but deposits and withdrawals stop matching it and the asset is
/// freed for other mappings.
pub fn execute_clean_map_token(
    deps: DepsMut,
    info: MessageInfo,
    token_id: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_role(&deps.querier, &config.acl, mapper_role(), &info.sender)?;

    let token_id = as_bytes32(&token_id)?;

    let mut mapping =
        TOKEN_MAP
            .may_load(deps.storage, &token_id)?
            .ok_or(ContractError::TokenNotMapped {
                token_id: bytes32_to_hex(&token_id),
            })?;

    mapping.enabled = false;
    TOKEN_MAP.save(deps.storage, &token_id, &mapping)?;

    let asset_key = mapping.asset.key();
    if let Some(owner) = ASSET_TO_TOKEN.may_load(deps.storage, &asset_key)? {
        if owner == token_id {
            ASSET_TO_TOKEN.remove(deps.storage, &asset_key);
        }
    }

    Ok(Response::new()
        .add_attribute("method", "clean_map_token")
        .add_attribute("token_id", bytes32_to_hex(&token_id))
        .add_attribute("asset", asset_key))
}
