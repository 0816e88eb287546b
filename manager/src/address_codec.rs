//! Address encoding helpers for the two chains the bridge spans.
//!
//! Withdrawal leaves commit to the destination wallet as its raw 20-byte
//! payload, so the contract needs to recover those bytes from the bech32
//! string a claimant submits. Deposits go the other way: the EVM destination
//! arrives as a 0x hex string and is validated and normalized before it is
//! emitted for the relayer.
//!
//! The bech32 routines here deliberately skip checksum verification when
//! decoding. The chain has already validated any address that reaches an
//! execute handler; this module only extracts the payload bytes.

use cosmwasm_std::{StdError, StdResult};

// ============================================================================
// EVM Addresses
// ============================================================================

/// Parse a 0x-prefixed hex EVM address to 20 bytes
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; 20]> {
    let hex_str = addr.strip_prefix("0x").unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ============================================================================
// Bech32 Addresses
// ============================================================================

/// Decode a bech32 address to raw 20 bytes
///
/// Splits off the human-readable prefix, strips the 6-character checksum and
/// unpacks the remaining base32 payload. Account addresses are always 20
/// bytes; anything else (contract addresses, malformed input) is rejected.
pub fn decode_bech32_address(addr: &str) -> StdResult<[u8; 20]> {
    // Format: hrp + "1" + base32_data + checksum
    let parts: Vec<&str> = addr.rsplitn(2, '1').collect();
    if parts.len() != 2 {
        return Err(StdError::generic_err("Invalid bech32 format"));
    }

    let data_part = parts[0];
    // The data part includes the address data + 6 char checksum
    if data_part.len() < 7 {
        return Err(StdError::generic_err("Bech32 data too short"));
    }

    let data_without_checksum = &data_part[..data_part.len() - 6];

    let decoded = decode_bech32_data(data_without_checksum)?;

    // Regroup from 5-bit symbols to 8-bit bytes
    let bytes = convert_bits(&decoded, 5, 8, false)?;

    if bytes.len() != 20 {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 20 bytes, got {}",
            bytes.len()
        )));
    }

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    let data5 = convert_bits(bytes, 8, 5, true)?;

    let data_str = encode_bech32_data(&data5);

    let checksum = compute_bech32_checksum(hrp, &data5);
    let checksum_str = encode_bech32_data(&checksum);

    Ok(format!("{}1{}{}", hrp, data_str, checksum_str))
}

/// Convert bits between different group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::new();
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        let v = value as u32;
        acc = (acc << from_bits) | v;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad && bits > 0 {
        result.push(((acc << (to_bits - bits)) & max_v) as u8);
    } else if !pad && bits >= from_bits {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

/// Bech32 character set
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Decode bech32 base32 data
fn decode_bech32_data(data: &str) -> StdResult<Vec<u8>> {
    let mut result = Vec::with_capacity(data.len());

    for c in data.chars() {
        let idx = BECH32_CHARSET
            .iter()
            .position(|&x| x as char == c)
            .ok_or_else(|| StdError::generic_err(format!("Invalid bech32 character: {}", c)))?;
        result.push(idx as u8);
    }

    Ok(result)
}

/// Encode bytes to bech32 base32 string
fn encode_bech32_data(data: &[u8]) -> String {
    data.iter()
        .map(|&b| BECH32_CHARSET[b as usize] as char)
        .collect()
}

/// Compute bech32 checksum
fn compute_bech32_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    let polymod = bech32_polymod(&values) ^ 1;

    let mut checksum = Vec::with_capacity(6);
    for i in 0..6 {
        checksum.push(((polymod >> (5 * (5 - i))) & 31) as u8);
    }

    checksum
}

/// Expand HRP for checksum calculation
fn expand_hrp(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);

    for c in hrp.chars() {
        result.push((c as u8) >> 5);
    }
    result.push(0);
    for c in hrp.chars() {
        result.push((c as u8) & 31);
    }

    result
}

/// Bech32 polymod function
fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
