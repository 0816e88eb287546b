//! Token registry and admin integration tests.
//!
//! Covers vault registration, mapping lifecycle and the admin knobs:
//! - Role gating on every mutating call
//! - Map / remap / clean invariants around the asset reverse index
//! - Disabled mappings blocking both bridge directions
//! - Fee, treasurer and pause setters
//! - Mapping enumeration and pagination


use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw_multi_test::Executor;

use common::asset::AssetInfo;
use manager::msg::{
    ConfigResponse, ExecuteMsg, QueryMsg, TokenIdResponse, TokenMappingResponse,
    TokenMappingsResponse, VaultResponse,
};

use setup::*;

fn native(denom: &str) -> AssetInfo {
    AssetInfo::Native {
        denom: denom.to_string(),
    }
}

fn query_mapping(env: &TestEnv, token_id: [u8; 32]) -> Option<TokenMappingResponse> {
    env.app
        .wrap()
        .query_wasm_smart(
            &env.manager,
            &QueryMsg::TokenMapping {
                token_id: Binary::from(token_id.to_vec()),
            },
        )
        .unwrap()
}

fn query_token_id(env: &TestEnv, asset: AssetInfo) -> Option<Binary> {
    let resp: TokenIdResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.manager, &QueryMsg::TokenId { asset })
        .unwrap();
    resp.token_id
}

fn query_config(env: &TestEnv) -> ConfigResponse {
    env.app
        .wrap()
        .query_wasm_smart(&env.manager, &QueryMsg::Config {})
        .unwrap()
}

fn exec_err(env: &mut TestEnv, sender: &Addr, msg: &ExecuteMsg) -> String {
    env.app
        .execute_contract(sender.clone(), env.manager.clone(), msg, &[])
        .unwrap_err()
        .root_cause()
        .to_string()
}

#[test]
fn register_vault_requires_admin() {
    let mut env = setup();
    let vault = env.vault.clone();

    let msg = ExecuteMsg::RegisterVault {
        token_type: Binary::from(USD_TOKEN_TYPE.to_vec()),
        vault: vault.to_string(),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("does not hold the required role"));
    let user = env.user.clone();
    assert!(exec_err(&mut env, &user, &msg).contains("does not hold the required role"));
}

#[test]
fn register_vault_overwrites_existing() {
    let mut env = setup();

    let other_code = env.app.store_code(contract_vault());
    let other = env
        .app
        .instantiate_contract(
            other_code,
            env.admin.clone(),
            &cosmwasm_std::Empty {},
            &[],
            "vault-2",
            None,
        )
        .unwrap();
    register_vault(&mut env, LUNA_TOKEN_TYPE, &other);

    let resp: VaultResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.manager,
            &QueryMsg::Vault {
                token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
            },
        )
        .unwrap();
    assert_eq!(resp.vault, Some(other));
}

#[test]
fn vault_query_returns_none_for_unknown_type() {
    let env = setup();

    let resp: VaultResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.manager,
            &QueryMsg::Vault {
                token_type: Binary::from([0x09; 32].to_vec()),
            },
        )
        .unwrap();
    assert_eq!(resp.vault, None);
}

#[test]
fn map_token_requires_mapper_role() {
    let mut env = setup();

    // The admin role does not imply the mapper role
    let msg = ExecuteMsg::MapToken {
        token_id: Binary::from(USD_TOKEN_ID.to_vec()),
        asset: native("uusd"),
        token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
    };
    let admin = env.admin.clone();
    assert!(exec_err(&mut env, &admin, &msg).contains("does not hold the required role"));
}

#[test]
fn map_token_requires_registered_vault() {
    let mut env = setup();

    let msg = ExecuteMsg::MapToken {
        token_id: Binary::from(USD_TOKEN_ID.to_vec()),
        asset: native("uusd"),
        token_type: Binary::from([0x09; 32].to_vec()),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("No vault registered for token type"));
}

#[test]
fn map_token_rejects_duplicate_token_id() {
    let mut env = setup();

    let msg = ExecuteMsg::MapToken {
        token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
        asset: native("uusd"),
        token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("Token already mapped"));
}

#[test]
fn map_token_rejects_duplicate_asset() {
    let mut env = setup();

    // "uluna" already belongs to the setup mapping
    let msg = ExecuteMsg::MapToken {
        token_id: Binary::from(USD_TOKEN_ID.to_vec()),
        asset: native("uluna"),
        token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("Asset already mapped"));
}

#[test]
fn remap_moves_asset_and_reverse_index() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.mapper.clone(),
            env.manager.clone(),
            &ExecuteMsg::RemapToken {
                token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
                asset: native("uusd"),
                token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
            },
            &[],
        )
        .unwrap();

    let mapping = query_mapping(&env, LUNA_TOKEN_ID).unwrap();
    assert_eq!(mapping.asset, native("uusd"));
    assert!(mapping.enabled);

    // The old asset key is released, the new one points back
    assert_eq!(query_token_id(&env, native("uluna")), None);
    assert_eq!(
        query_token_id(&env, native("uusd")),
        Some(Binary::from(LUNA_TOKEN_ID.to_vec()))
    );

    // A fresh mapping can claim the released asset
    map_token(&mut env, [0xDD; 32], native("uluna"), LUNA_TOKEN_TYPE);
    assert_eq!(
        query_token_id(&env, native("uluna")),
        Some(Binary::from([0xDD; 32].to_vec()))
    );
}

#[test]
fn remap_rejects_unmapped_token() {
    let mut env = setup();

    let msg = ExecuteMsg::RemapToken {
        token_id: Binary::from([0xEE; 32].to_vec()),
        asset: native("uusd"),
        token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("Token not mapped"));
}

#[test]
fn remap_rejects_asset_owned_by_other_token() {
    let mut env = setup();
    map_usd_token(&mut env);

    let msg = ExecuteMsg::RemapToken {
        token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
        asset: native("uusd"),
        token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("Asset already mapped"));
}

#[test]
fn remap_requires_registered_vault() {
    let mut env = setup();

    let msg = ExecuteMsg::RemapToken {
        token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
        asset: native("uluna"),
        token_type: Binary::from([0x09; 32].to_vec()),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("No vault registered for token type"));
}

#[test]
fn clean_requires_mapper_role() {
    let mut env = setup();

    let msg = ExecuteMsg::CleanMapToken {
        token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
    };
    let admin = env.admin.clone();
    assert!(exec_err(&mut env, &admin, &msg).contains("does not hold the required role"));
}

#[test]
fn clean_disables_mapping_and_frees_asset() {
    let mut env = setup();

    // A published claim against the token, not yet withdrawn
    let params = make_params(&env, 25_000, 1, 0);
    set_root(&mut env, leaf_of(&params));

    env.app
        .execute_contract(
            env.mapper.clone(),
            env.manager.clone(),
            &ExecuteMsg::CleanMapToken {
                token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
            },
            &[],
        )
        .unwrap();

    // The record survives disabled; the asset key is released
    let mapping = query_mapping(&env, LUNA_TOKEN_ID).unwrap();
    assert!(!mapping.enabled);
    assert_eq!(query_token_id(&env, native("uluna")), None);

    // Disabled mappings block withdrawals of proven claims
    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.manager.clone(),
            &ExecuteMsg::Withdraw {
                params,
                proof: vec![],
            },
            &coins(WITHDRAW_FEE, FEE_DENOM),
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Token not mapped"));

    // The released asset can back a different token
    map_token(&mut env, [0xDD; 32], native("uluna"), LUNA_TOKEN_TYPE);
}

#[test]
fn remap_reenables_cleaned_mapping() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.mapper.clone(),
            env.manager.clone(),
            &ExecuteMsg::CleanMapToken {
                token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
            },
            &[],
        )
        .unwrap();
    assert!(!query_mapping(&env, LUNA_TOKEN_ID).unwrap().enabled);

    env.app
        .execute_contract(
            env.mapper.clone(),
            env.manager.clone(),
            &ExecuteMsg::RemapToken {
                token_id: Binary::from(LUNA_TOKEN_ID.to_vec()),
                asset: native("uluna"),
                token_type: Binary::from(LUNA_TOKEN_TYPE.to_vec()),
            },
            &[],
        )
        .unwrap();

    let mapping = query_mapping(&env, LUNA_TOKEN_ID).unwrap();
    assert!(mapping.enabled);
    assert_eq!(
        query_token_id(&env, native("uluna")),
        Some(Binary::from(LUNA_TOKEN_ID.to_vec()))
    );
}

#[test]
fn token_mappings_paginate_by_token_id() {
    let mut env = setup();

    // Setup already mapped [0xAA; 32]; these sort after it byte-wise
    map_token(&mut env, [0xB1; 32], native("ua"), LUNA_TOKEN_TYPE);
    map_token(&mut env, [0xB2; 32], native("ub"), LUNA_TOKEN_TYPE);
    map_token(&mut env, [0xB3; 32], native("uc"), LUNA_TOKEN_TYPE);

    let resp: TokenMappingsResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.manager,
            &QueryMsg::TokenMappings {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    let ids: Vec<Vec<u8>> = resp.mappings.iter().map(|m| m.token_id.to_vec()).collect();
    assert_eq!(
        ids,
        vec![vec![0xAA; 32], vec![0xB1; 32], vec![0xB2; 32], vec![0xB3; 32]]
    );

    let resp: TokenMappingsResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.manager,
            &QueryMsg::TokenMappings {
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(resp.mappings.len(), 2);
    assert_eq!(resp.mappings[1].token_id.as_slice(), &[0xB1; 32][..]);

    let resp: TokenMappingsResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.manager,
            &QueryMsg::TokenMappings {
                start_after: Some(Binary::from([0xB1; 32].to_vec())),
                limit: None,
            },
        )
        .unwrap();
    let ids: Vec<Vec<u8>> = resp.mappings.iter().map(|m| m.token_id.to_vec()).collect();
    assert_eq!(ids, vec![vec![0xB2; 32], vec![0xB3; 32]]);
}

#[test]
fn fee_setters_require_admin_and_take_effect() {
    let mut env = setup();

    let msg = ExecuteMsg::SetDepositFee {
        fee: Uint128::new(700),
    };
    let mapper = env.mapper.clone();
    assert!(exec_err(&mut env, &mapper, &msg).contains("does not hold the required role"));

    env.app
        .execute_contract(env.admin.clone(), env.manager.clone(), &msg, &[])
        .unwrap();
    env.app
        .execute_contract(
            env.admin.clone(),
            env.manager.clone(),
            &ExecuteMsg::SetWithdrawFee {
                fee: Uint128::new(2_000),
            },
            &[],
        )
        .unwrap();

    let config = query_config(&env);
    assert_eq!(config.deposit_fee, Uint128::new(700));
    assert_eq!(config.withdraw_fee, Uint128::new(2_000));

    // The new withdraw fee is enforced immediately
    let params = make_params(&env, 25_000, 1, 0);
    set_root(&mut env, leaf_of(&params));
    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.manager.clone(),
            &ExecuteMsg::Withdraw {
                params,
                proof: vec![],
            },
            &coins(1_000, FEE_DENOM),
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("required 2000, sent 1000"));
}

#[test]
fn set_treasurer_requires_admin_and_takes_effect() {
    let mut env = setup();

    let msg = ExecuteMsg::SetTreasurer {
        treasurer: "terra1newtreasurer".to_string(),
    };
    let user = env.user.clone();
    assert!(exec_err(&mut env, &user, &msg).contains("does not hold the required role"));

    env.app
        .execute_contract(env.admin.clone(), env.manager.clone(), &msg, &[])
        .unwrap();
    assert_eq!(
        query_config(&env).treasurer,
        Addr::unchecked("terra1newtreasurer")
    );

    // Fees now route to the new treasurer
    let params = make_params(&env, 25_000, 1, 0);
    set_root(&mut env, leaf_of(&params));
    env.app
        .execute_contract(
            env.user.clone(),
            env.manager.clone(),
            &ExecuteMsg::Withdraw {
                params,
                proof: vec![],
            },
            &coins(WITHDRAW_FEE, FEE_DENOM),
        )
        .unwrap();
    assert_eq!(
        balance(&env, &Addr::unchecked("terra1newtreasurer"), "uluna"),
        WITHDRAW_FEE
    );
}

#[test]
fn set_paused_requires_admin() {
    let mut env = setup();

    let msg = ExecuteMsg::SetPaused { paused: true };
    let updater = env.updater.clone();
    assert!(exec_err(&mut env, &updater, &msg).contains("does not hold the required role"));

    env.app
        .execute_contract(env.admin.clone(), env.manager.clone(), &msg, &[])
        .unwrap();
    assert!(query_config(&env).paused);
}
