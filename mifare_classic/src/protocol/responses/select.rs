// mifare-classic-rs/mifare_classic/src/protocol/responses/select.rs

use crate::constants;
use crate::protocol::responses::expect_len;
use crate::{Error, Result};

/// Decode the SAK answered to a select. Only the MIFARE Classic values
/// (0x08 for 1K, 0x18 for 4K) are accepted; anything else means the card
/// in the field is not a Classic.
pub fn decode_sak(data: &[u8]) -> Result<u8> {
    expect_len(data, 1)?;
    let sak = data[0];
    if sak == constants::SAK_S50 || sak == constants::SAK_S70 {
        Ok(sak)
    } else {
        Err(Error::SakError { sak })
    }
}
