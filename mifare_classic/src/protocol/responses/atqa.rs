// mifare-classic-rs/mifare_classic/src/protocol/responses/atqa.rs

use crate::protocol::responses::expect_len;
use crate::types::CardType;
use crate::{Error, Result};

/// Decode an ATQA answer (2 bytes) into the card generation.
pub fn decode_atqa(data: &[u8]) -> Result<CardType> {
    expect_len(data, 2)?;
    CardType::from_atqa([data[0], data[1]]).ok_or(Error::UnknownCardType {
        atqa0: data[0],
        atqa1: data[1],
    })
}
