//! Deposits bridged out to the source chain.
//!
//! A deposit moves a mapped asset into its vault and emits an event the
//! relayer folds into the next batch on the source chain. Native assets ride
//! along as attached funds; CW20 assets are pulled from the depositor through
//! an allowance granted beforehand, the same approve-then-deposit shape the
//! source chain uses.

use common::asset::AssetInfo;
use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::address_codec::{encode_evm_address, parse_evm_address};
use crate::error::ContractError;
use crate::execute::{ensure_only_denoms, sent_amount};
use crate::hash::bytes32_to_hex;
use crate::state::{ASSET_TO_TOKEN, CONFIG, DEPOSIT_NONCE, TOKEN_MAP, VAULTS};

/// Execute handler for depositing an asset toward the source chain
pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
    dest_wallet: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::ContractPaused);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be non-zero".to_string(),
        });
    }

    // The destination is an address on the source chain, not here
    let dest = parse_evm_address(&dest_wallet).map_err(|e| ContractError::InvalidDestination {
        reason: e.to_string(),
    })?;

    // Resolve the token identifier this asset bridges as
    let asset_key = asset.key();
    let token_id = ASSET_TO_TOKEN
        .may_load(deps.storage, &asset_key)?
        .ok_or(ContractError::TokenNotMapped {
            token_id: asset_key.clone(),
        })?;

    let mapping = TOKEN_MAP
        .may_load(deps.storage, &token_id)?
        .filter(|m| m.enabled)
        .ok_or(ContractError::TokenNotMapped {
            token_id: bytes32_to_hex(&token_id),
        })?;

    let vault = VAULTS
        .may_load(deps.storage, &mapping.token_type)?
        .ok_or(ContractError::VaultNotRegistered {
            token_type: bytes32_to_hex(&mapping.token_type),
        })?;

    let fee = config.deposit_fee;
    let mut messages: Vec<CosmosMsg> = vec![];
    let treasurer_take: Uint128;

    match &asset {
        AssetInfo::Native { denom } if *denom == config.fee_denom => {
            // Deposit and fee share one denomination: a single attached total
            // covers both, everything beyond the deposit goes to the treasurer
            ensure_only_denoms(&info.funds, &[config.fee_denom.as_str()])?;
            let total = sent_amount(&info.funds, &config.fee_denom);

            if total < amount {
                return Err(ContractError::InvalidAmount {
                    reason: format!(
                        "attached {} {} does not cover the deposit amount",
                        total, denom
                    ),
                });
            }
            let fee_sent = total - amount;
            if fee_sent < fee {
                return Err(ContractError::InsufficientFee {
                    required: fee,
                    sent: fee_sent,
                });
            }

            treasurer_take = fee_sent;
            messages.push(CosmosMsg::Bank(BankMsg::Send {
                to_address: vault.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }));
        }
        AssetInfo::Native { denom } => {
            // Asset and fee in distinct denominations: the asset amount must
            // match exactly, the fee denomination is forwarded in full
            ensure_only_denoms(&info.funds, &[denom.as_str(), config.fee_denom.as_str()])?;

            let asset_sent = sent_amount(&info.funds, denom);
            if asset_sent != amount {
                return Err(ContractError::InvalidAmount {
                    reason: format!("expected exactly {} {}, got {}", amount, denom, asset_sent),
                });
            }
            let fee_sent = sent_amount(&info.funds, &config.fee_denom);
            if fee_sent < fee {
                return Err(ContractError::InsufficientFee {
                    required: fee,
                    sent: fee_sent,
                });
            }

            treasurer_take = fee_sent;
            messages.push(CosmosMsg::Bank(BankMsg::Send {
                to_address: vault.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }));
        }
        AssetInfo::Cw20 { contract_addr } => {
            // Only the fee may be attached; the asset is pulled via allowance
            ensure_only_denoms(&info.funds, &[config.fee_denom.as_str()])?;
            let fee_sent = sent_amount(&info.funds, &config.fee_denom);
            if fee_sent < fee {
                return Err(ContractError::InsufficientFee {
                    required: fee,
                    sent: fee_sent,
                });
            }

            treasurer_take = fee_sent;
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: vault.to_string(),
                    amount,
                })?,
                funds: vec![],
            }));
        }
    }

    if !treasurer_take.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: config.treasurer.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom.clone(),
                amount: treasurer_take,
            }],
        }));
    }

    let nonce = DEPOSIT_NONCE.load(deps.storage)?;
    DEPOSIT_NONCE.save(deps.storage, &(nonce + 1))?;

    // The relayer reads this event to credit the destination on the source
    // chain; dest_wallet is normalized so indexing stays byte-stable
    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "deposit")
        .add_attribute("deposit_nonce", nonce.to_string())
        .add_attribute("depositor", info.sender)
        .add_attribute("token_id", bytes32_to_hex(&token_id))
        .add_attribute("asset", asset_key)
        .add_attribute("amount", amount.to_string())
        .add_attribute("dest_wallet", encode_evm_address(&dest))
        .add_attribute("fee", treasurer_take.to_string()))
}
