// mifare-classic-rs/mifare_classic/src/protocol/value_block.rs

//! Value block codec.
//!
//! A value block stores a signed 32-bit value three times (once inverted)
//! and a one-byte block address four times (twice inverted):
//!
//! `v v v v  ~v ~v ~v ~v  v v v v  addr ~addr addr ~addr`
//!
//! The redundancy lets the card (and this decoder) detect a write that was
//! torn by field loss.

use crate::{Error, Result};

/// Encode a value and its backup address into a 16-byte block image.
pub fn encode(value: i32, addr: u8) -> [u8; 16] {
    let v = (value as u32).to_le_bytes();
    let v_inv = (!(value as u32)).to_le_bytes();

    let mut data = [0u8; 16];
    data[0..4].copy_from_slice(&v);
    data[4..8].copy_from_slice(&v_inv);
    data[8..12].copy_from_slice(&v);
    data[12] = addr;
    data[13] = !addr;
    data[14] = addr;
    data[15] = !addr;
    data
}

/// Decode a block image into `(value, addr)`, validating all redundant
/// copies. A disagreeing value and a disagreeing address are reported as
/// distinct errors.
pub fn decode(data: &[u8; 16]) -> Result<(i32, u8)> {
    let value_0 = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let value_1 = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let value_2 = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);

    if value_0 != value_2 || value_0 != !value_1 {
        return Err(Error::InvalidValueBlock);
    }

    let address_0 = data[12];
    let address_1 = !data[13];
    let address_2 = data[14];
    let address_3 = !data[15];

    if address_0 != address_2 || address_1 != address_3 || address_0 != address_1 {
        return Err(Error::InvalidValueAddress);
    }

    Ok((value_0 as i32, address_0))
}
