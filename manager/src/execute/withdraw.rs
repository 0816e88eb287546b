//! Proof-verified withdrawal claims.
//!
//! A claimant submits the seven claim parameters plus a merkle proof. The
//! handler recomputes the leaf hash, checks membership against the root
//! window, guards against replay and instructs the vault for the mapped token
//! type to release the asset. Marking the exit processed and dispatching the
//! release happen in the same transaction, so a failed release leaves the
//! exit claimable.

use common::vault::VaultExecuteMsg;
use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, Coin, CosmosMsg, DepsMut, MessageInfo, Response, Uint128,
    WasmMsg,
};

use crate::address_codec::decode_bech32_address;
use crate::error::ContractError;
use crate::execute::{ensure_only_denoms, sent_amount};
use crate::hash::{bytes32_to_hex, claim_leaf_hash};
use crate::merkle;
use crate::msg::WithdrawParams;
use crate::state::{CONFIG, PROCESSED_EXITS, ROOT_WINDOW, TOKEN_MAP, VAULTS};

/// Claim parameters decoded into their fixed-width forms
pub struct DecodedClaim {
    /// Source transaction hash
    pub src_tx_hash: [u8; 32],
    /// Source token identifier
    pub token_id: [u8; 32],
    /// Leaf hash, also the exit identifier
    pub leaf: [u8; 32],
}

/// Decode claim parameters and compute their leaf hash
///
/// Only shape is checked here; business rules like the non-zero amount live
/// in the execute handler so the leaf-hash query stays usable for arbitrary
/// parameters.
pub fn decode_claim(params: &WithdrawParams) -> Result<DecodedClaim, ContractError> {
    let src_tx_hash: [u8; 32] =
        params
            .src_tx_hash
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidClaim {
                reason: format!(
                    "source tx hash must be 32 bytes, got {}",
                    params.src_tx_hash.len()
                ),
            })?;

    let token_id: [u8; 32] =
        params
            .token_id
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidClaim {
                reason: format!(
                    "token identifier must be 32 bytes, got {}",
                    params.token_id.len()
                ),
            })?;

    let wallet =
        decode_bech32_address(&params.dest_wallet).map_err(|e| ContractError::InvalidClaim {
            reason: format!("destination wallet: {}", e),
        })?;

    let leaf = claim_leaf_hash(
        params.batch_index,
        params.sub_index,
        &params.amount.to_be_bytes(),
        &wallet,
        &src_tx_hash,
        params.src_event_index,
        &token_id,
    );

    Ok(DecodedClaim {
        src_tx_hash,
        token_id,
        leaf,
    })
}

/// Execute handler for claiming a withdrawal
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    params: WithdrawParams,
    proof: Vec<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::ContractPaused);
    }

    // Fee first: claims that cannot pay are rejected before any proof work
    ensure_only_denoms(&info.funds, &[config.fee_denom.as_str()])?;
    let fee_sent = sent_amount(&info.funds, &config.fee_denom);
    if fee_sent < config.withdraw_fee {
        return Err(ContractError::InsufficientFee {
            required: config.withdraw_fee,
            sent: fee_sent,
        });
    }

    // Claim shape
    if params.amount.is_zero() {
        return Err(ContractError::InvalidClaim {
            reason: "amount must be non-zero".to_string(),
        });
    }

    let recipient = deps
        .api
        .addr_validate(&params.dest_wallet)
        .map_err(|e| ContractError::InvalidClaim {
            reason: format!("destination wallet: {}", e),
        })?;

    let claim = decode_claim(&params)?;

    let mut proof_nodes: Vec<[u8; 32]> = Vec::with_capacity(proof.len());
    for (i, node) in proof.iter().enumerate() {
        let node: [u8; 32] =
            node.as_slice()
                .try_into()
                .map_err(|_| ContractError::InvalidClaim {
                    reason: format!("proof element {} must be 32 bytes, got {}", i, node.len()),
                })?;
        proof_nodes.push(node);
    }

    // Membership: current root first, then the previous one
    let window = ROOT_WINDOW.load(deps.storage)?;
    let proven = merkle::verify(&claim.leaf, &proof_nodes, &window.current_root)
        || merkle::verify(&claim.leaf, &proof_nodes, &window.previous_root);
    if !proven {
        return Err(ContractError::InvalidProof);
    }

    // Replay check comes after proof success so probing with an invalid proof
    // never learns whether an exit was claimed
    if PROCESSED_EXITS.has(deps.storage, &claim.leaf) {
        return Err(ContractError::AlreadyProcessed);
    }
    PROCESSED_EXITS.save(deps.storage, &claim.leaf, &true)?;

    // Resolve the local asset and its vault
    let mapping = TOKEN_MAP
        .may_load(deps.storage, &claim.token_id)?
        .filter(|m| m.enabled)
        .ok_or(ContractError::TokenNotMapped {
            token_id: bytes32_to_hex(&claim.token_id),
        })?;

    let vault = VAULTS
        .may_load(deps.storage, &mapping.token_type)?
        .ok_or(ContractError::ReleaseFailed {
            token_type: bytes32_to_hex(&mapping.token_type),
        })?;

    let release_amount =
        Uint128::try_from(params.amount).map_err(|_| ContractError::AmountOverflow)?;

    // Release rides in the same transaction; if the vault rejects it, every
    // state write above reverts with it
    let mut messages: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Release {
            asset: mapping.asset.clone(),
            recipient: recipient.to_string(),
            amount: release_amount,
        })?,
        funds: vec![],
    })];

    if !fee_sent.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: config.treasurer.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom.clone(),
                amount: fee_sent,
            }],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "withdraw")
        .add_attribute("leaf_hash", bytes32_to_hex(&claim.leaf))
        .add_attribute("batch_index", params.batch_index.to_string())
        .add_attribute("sub_index", params.sub_index.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", release_amount.to_string())
        .add_attribute("token_id", bytes32_to_hex(&claim.token_id))
        .add_attribute("src_tx_hash", bytes32_to_hex(&claim.src_tx_hash))
        .add_attribute("fee", fee_sent.to_string()))
}
