// mifare-classic-rs/mifare_classic/src/protocol/commands/value.rs

use crate::constants;
use crate::protocol::crc::append_crc_a;

fn encode_value_begin(command: u8, block: u8) -> Vec<u8> {
    let mut out = vec![command, block];
    append_crc_a(&mut out);
    out
}

/// Encode the first step of an increment: 0xC1 + block + CRC.
pub fn encode_increment_begin(block: u8) -> Vec<u8> {
    encode_value_begin(constants::CMD_INCREMENT, block)
}

/// Encode the first step of a decrement: 0xC0 + block + CRC.
pub fn encode_decrement_begin(block: u8) -> Vec<u8> {
    encode_value_begin(constants::CMD_DECREMENT, block)
}

/// Encode the first step of a restore: 0xC2 + block + CRC.
pub fn encode_restore_begin(block: u8) -> Vec<u8> {
    encode_value_begin(constants::CMD_RESTORE, block)
}

/// Encode a transfer: 0xB0 + block + CRC.
pub fn encode_transfer(block: u8) -> Vec<u8> {
    encode_value_begin(constants::CMD_TRANSFER, block)
}

/// Encode the operand phase of increment/decrement/restore:
/// the value little-endian plus CRC. Restore sends a zero operand.
pub fn encode_value_operand(value: u32) -> Vec<u8> {
    let mut out = value.to_le_bytes().to_vec();
    append_crc_a(&mut out);
    out
}
