//! Hash computation for withdrawal claims.
//!
//! The leaf hash commits to all seven claim fields with the same byte layout
//! the relayer uses when it builds the batch tree, so an on-chain recomputed
//! leaf matches the off-chain one bit for bit.
//!
//! # Byte Layout (140 bytes total)
//! - Bytes 0-7:     batch index (u64, big-endian)
//! - Bytes 8-15:    sub-index (u64, big-endian)
//! - Bytes 16-47:   amount (uint256, big-endian)
//! - Bytes 48-67:   destination wallet (20 raw bytes)
//! - Bytes 68-99:   source tx hash (32 bytes)
//! - Bytes 100-107: source event index (u64, big-endian)
//! - Bytes 108-139: token identifier (32 bytes)

use tiny_keccak::{Hasher, Keccak};

/// Total size of the canonical claim encoding
pub const CLAIM_ENCODING_LEN: usize = 140;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Serialize a withdrawal claim into its canonical 140-byte encoding
///
/// # Arguments
/// * `batch_index` - Source-chain batch index
/// * `sub_index` - Sub-index within the batch
/// * `amount` - Amount as 32 big-endian bytes (uint256)
/// * `dest_wallet` - Raw 20-byte destination wallet
/// * `src_tx_hash` - 32-byte source transaction hash
/// * `src_event_index` - Event index within the source transaction
/// * `token_id` - 32-byte source token identifier
pub fn encode_claim(
    batch_index: u64,
    sub_index: u64,
    amount: &[u8; 32],
    dest_wallet: &[u8; 20],
    src_tx_hash: &[u8; 32],
    src_event_index: u64,
    token_id: &[u8; 32],
) -> [u8; CLAIM_ENCODING_LEN] {
    let mut data = [0u8; CLAIM_ENCODING_LEN];

    // u64 fields are big-endian, matching the uint256 fields
    data[0..8].copy_from_slice(&batch_index.to_be_bytes());
    data[8..16].copy_from_slice(&sub_index.to_be_bytes());
    data[16..48].copy_from_slice(amount);
    data[48..68].copy_from_slice(dest_wallet);
    data[68..100].copy_from_slice(src_tx_hash);
    data[100..108].copy_from_slice(&src_event_index.to_be_bytes());
    data[108..140].copy_from_slice(token_id);

    data
}

/// Compute the leaf hash for a withdrawal claim
///
/// The leaf hash is the keccak256 of the canonical 140-byte claim encoding.
/// It doubles as the exit identifier in the processed-exit set.
pub fn claim_leaf_hash(
    batch_index: u64,
    sub_index: u64,
    amount: &[u8; 32],
    dest_wallet: &[u8; 20],
    src_tx_hash: &[u8; 32],
    src_event_index: u64,
    token_id: &[u8; 32],
) -> [u8; 32] {
    let data = encode_claim(
        batch_index,
        sub_index,
        amount,
        dest_wallet,
        src_tx_hash,
        src_event_index,
        token_id,
    );
    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex string (with or without 0x prefix) to 32-byte array
pub fn hex_to_bytes32(hex_str: &str) -> Result<[u8; 32], &'static str> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if hex_str.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }

    let bytes = hex::decode(hex_str).map_err(|_| "Invalid hex character")?;
    let mut result = [0u8; 32];
    result.copy_from_slice(&bytes);
    Ok(result)
}
