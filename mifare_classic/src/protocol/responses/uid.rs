// mifare-classic-rs/mifare_classic/src/protocol/responses/uid.rs

use crate::protocol::responses::expect_len;
use crate::types::Uid;
use crate::{Error, Result};

/// Decode an anticollision answer: 4 UID bytes followed by the BCC
/// (XOR of the UID bytes).
pub fn decode_uid(data: &[u8]) -> Result<Uid> {
    expect_len(data, 5)?;
    let uid = Uid::from_bytes([data[0], data[1], data[2], data[3]]);
    let expected = uid.bcc();
    if expected != data[4] {
        return Err(Error::BccMismatch {
            expected,
            actual: data[4],
        });
    }
    Ok(uid)
}
