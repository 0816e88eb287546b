//! Query handlers for the bridge manager contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::execute::decode_claim;
use crate::msg::{
    ConfigResponse, DepositNonceResponse, IsProcessedResponse, LeafHashResponse,
    MerkleRootsResponse, TokenIdResponse, TokenMappingResponse, TokenMappingsResponse,
    VaultResponse, WithdrawParams,
};
use crate::state::{
    ASSET_TO_TOKEN, CONFIG, DEPOSIT_NONCE, PROCESSED_EXITS, ROOT_WINDOW, TOKEN_MAP, VAULTS,
};
use common::asset::AssetInfo;

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        acl: config.acl,
        treasurer: config.treasurer,
        fee_denom: config.fee_denom,
        deposit_fee: config.deposit_fee,
        withdraw_fee: config.withdraw_fee,
        paused: config.paused,
    })
}

/// Query both slots of the merkle root window.
pub fn query_merkle_roots(deps: Deps) -> StdResult<MerkleRootsResponse> {
    let window = ROOT_WINDOW.load(deps.storage)?;
    Ok(MerkleRootsResponse {
        current_root: Binary::from(window.current_root.to_vec()),
        previous_root: Binary::from(window.previous_root.to_vec()),
        sequence: window.sequence,
    })
}

/// Query whether an exit has already been claimed.
pub fn query_is_processed(deps: Deps, leaf_hash: Binary) -> StdResult<IsProcessedResponse> {
    if leaf_hash.len() != 32 {
        return Err(StdError::generic_err("leaf_hash must be 32 bytes"));
    }
    let processed = PROCESSED_EXITS.has(deps.storage, leaf_hash.as_slice());
    Ok(IsProcessedResponse {
        leaf_hash,
        processed,
    })
}

/// Compute the leaf hash for claim parameters without submitting them.
pub fn query_leaf_hash(params: WithdrawParams) -> StdResult<LeafHashResponse> {
    let claim = decode_claim(&params).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(LeafHashResponse {
        leaf_hash: Binary::from(claim.leaf.to_vec()),
    })
}

/// Query the mapping for a source token identifier.
pub fn query_token_mapping(
    deps: Deps,
    token_id: Binary,
) -> StdResult<Option<TokenMappingResponse>> {
    if token_id.len() != 32 {
        return Err(StdError::generic_err("token_id must be 32 bytes"));
    }
    let mapping = TOKEN_MAP.may_load(deps.storage, token_id.as_slice())?;
    Ok(mapping.map(|m| TokenMappingResponse {
        token_id,
        asset: m.asset,
        token_type: Binary::from(m.token_type.to_vec()),
        enabled: m.enabled,
    }))
}

/// Query paginated list of token mappings.
pub fn query_token_mappings(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<TokenMappingsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start: Option<Bound<&[u8]>> = start_after
        .as_ref()
        .map(|id| Bound::exclusive(id.as_slice()));

    let mappings: Vec<TokenMappingResponse> = TOKEN_MAP
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token_id, m) = item?;
            Ok(TokenMappingResponse {
                token_id: Binary::from(token_id),
                asset: m.asset,
                token_type: Binary::from(m.token_type.to_vec()),
                enabled: m.enabled,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokenMappingsResponse { mappings })
}

/// Reverse lookup from a local asset to its source token identifier.
pub fn query_token_id(deps: Deps, asset: AssetInfo) -> StdResult<TokenIdResponse> {
    let token_id = ASSET_TO_TOKEN.may_load(deps.storage, &asset.key())?;
    Ok(TokenIdResponse {
        token_id: token_id.map(|id| Binary::from(id.to_vec())),
    })
}

/// Query the vault registered for a token type.
pub fn query_vault(deps: Deps, token_type: Binary) -> StdResult<VaultResponse> {
    if token_type.len() != 32 {
        return Err(StdError::generic_err("token_type must be 32 bytes"));
    }
    let vault = VAULTS.may_load(deps.storage, token_type.as_slice())?;
    Ok(VaultResponse { token_type, vault })
}

/// Query the current deposit nonce.
pub fn query_deposit_nonce(deps: Deps) -> StdResult<DepositNonceResponse> {
    let nonce = DEPOSIT_NONCE.load(deps.storage)?;
    Ok(DepositNonceResponse { nonce })
}
