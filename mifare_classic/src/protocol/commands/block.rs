// mifare-classic-rs/mifare_classic/src/protocol/commands/block.rs

use crate::constants;
use crate::protocol::crc::append_crc_a;
use crate::types::BlockData;

/// Encode a block read: 0x30 + block + CRC.
pub fn encode_read(block: u8) -> Vec<u8> {
    let mut out = vec![constants::CMD_READ, block];
    append_crc_a(&mut out);
    out
}

/// Encode the first step of a block write: 0xA0 + block + CRC.
pub fn encode_write_begin(block: u8) -> Vec<u8> {
    let mut out = vec![constants::CMD_WRITE, block];
    append_crc_a(&mut out);
    out
}

/// Encode the data phase of a block write: 16 bytes + CRC.
pub fn encode_write_data(data: BlockData) -> Vec<u8> {
    let mut out = Vec::with_capacity(constants::BLOCK_SIZE + 2);
    out.extend_from_slice(data.as_bytes());
    append_crc_a(&mut out);
    out
}
