// mifare-classic-rs/mifare_classic/src/protocol/responses/mod.rs

pub mod ack;
pub mod atqa;
pub mod read;
pub mod select;
pub mod uid;

pub use ack::{decode_ack, decode_value_ack};
pub use atqa::decode_atqa;
pub use read::decode_read_block;
pub use select::decode_sak;
pub use uid::decode_uid;

use crate::{Error, Result};

/// Responses are fixed-length; reject anything else before inspecting bytes.
pub(crate) fn expect_len(data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
