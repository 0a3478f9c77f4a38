// mifare-classic-rs/mifare_classic/src/protocol/responses/read.rs

use crate::constants;
use crate::protocol::crc::crc_a;
use crate::protocol::responses::expect_len;
use crate::types::BlockData;
use crate::{Error, Result};

/// Decode a read answer: 16 data bytes followed by CRC_A over them.
pub fn decode_read_block(data: &[u8]) -> Result<BlockData> {
    expect_len(data, constants::READ_RESPONSE_LEN)?;

    let crc = crc_a(&data[..16]);
    if data[16] != crc[0] || data[17] != crc[1] {
        return Err(Error::CrcMismatch {
            expected: u16::from_le_bytes(crc),
            actual: u16::from_le_bytes([data[16], data[17]]),
        });
    }

    let mut block = [0u8; 16];
    block.copy_from_slice(&data[..16]);
    Ok(BlockData::from_bytes(block))
}
