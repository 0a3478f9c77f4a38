// mifare-classic-rs/mifare_classic/src/protocol/responses/ack.rs

use crate::constants;
use crate::protocol::responses::expect_len;
use crate::{Error, Result};

/// Decode the 4-bit ACK answered to write/control command frames.
pub fn decode_ack(data: &[u8]) -> Result<()> {
    expect_len(data, 1)?;
    if data[0] == constants::ACK {
        Ok(())
    } else {
        Err(Error::NakError { code: data[0] })
    }
}

/// Decode the ACK answered to increment/decrement/restore/transfer.
/// The invalid-operation NAK (0x4) gets its own error: it is the card's
/// way of saying the block is not a value block or the access conditions
/// forbid the operation.
pub fn decode_value_ack(data: &[u8]) -> Result<()> {
    expect_len(data, 1)?;
    match data[0] {
        constants::ACK => Ok(()),
        constants::NAK_INVALID_OPERATION => Err(Error::InvalidOperation),
        code => Err(Error::NakError { code }),
    }
}
