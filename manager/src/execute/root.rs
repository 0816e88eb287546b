//! Merkle root publication.
//!
//! Each accepted batch of source-chain events is summarized off-chain as a
//! merkle root and published here by the merkle updater.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::{as_bytes32, ensure_role};
use crate::hash::bytes32_to_hex;
use crate::state::{merkle_updater_role, CONFIG, ROOT_WINDOW};

/// Execute handler for publishing a new merkle root
///
/// Rotates the two-slot window: the incoming root becomes current and the old
/// current becomes previous. Proofs against the displaced root stop verifying
/// from this point on. Publication is not gated on pause so the window keeps
/// tracking the source chain even during an incident.
pub fn execute_set_merkle_root(
    deps: DepsMut,
    info: MessageInfo,
    root: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_role(
        &deps.querier,
        &config.acl,
        merkle_updater_role(),
        &info.sender,
    )?;

    let root = as_bytes32(&root)?;

    let mut window = ROOT_WINDOW.load(deps.storage)?;
    window.rotate(root);
    ROOT_WINDOW.save(deps.storage, &window)?;

    Ok(Response::new()
        .add_attribute("method", "set_merkle_root")
        .add_attribute("root", bytes32_to_hex(&window.current_root))
        .add_attribute("previous_root", bytes32_to_hex(&window.previous_root))
        .add_attribute("sequence", window.sequence.to_string()))
}
