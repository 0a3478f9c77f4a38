// mifare-classic-rs/mifare_classic/src/error.rs

use thiserror::Error;

/// Common error type for every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The contactless front-end reported an exchange failure.
    #[error("contactless transport error: {0}")]
    Transport(String),

    /// The front-end returned a response of an unexpected length.
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// ATQA did not match any known MIFARE Classic generation.
    #[error("unknown atqa: ({atqa0:#04x}, {atqa1:#04x})")]
    UnknownCardType { atqa0: u8, atqa1: u8 },

    /// The UID check byte did not match the XOR of the UID bytes.
    #[error("uid bcc mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BccMismatch { expected: u8, actual: u8 },

    /// SELECT returned a SAK that is not a MIFARE Classic one.
    #[error("unexpected sak: {sak:#04x}")]
    SakError { sak: u8 },

    /// CRC_A over a read payload did not match the trailing bytes.
    #[error("crc mismatch: expected {expected:#06x}, got {actual:#06x}")]
    CrcMismatch { expected: u16, actual: u16 },

    /// The card answered with a NAK (or garbage) instead of the ACK nibble.
    #[error("nak from card: {code:#04x}")]
    NakError { code: u8 },

    /// The card answered a value operation with the invalid-operation NAK
    /// (the addressed block is not a value block or the operation is not
    /// permitted by the access conditions).
    #[error("operation rejected by card")]
    InvalidOperation,

    /// The Crypto1 handshake did not complete; the card stays mute after a
    /// failed authentication, so this surfaces as a transport-level failure.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The three redundant value copies of a value block disagree.
    #[error("value block corrupted: redundant value copies disagree")]
    InvalidValueBlock,

    /// The four redundant address bytes of a value block disagree.
    #[error("value block corrupted: redundant address copies disagree")]
    InvalidValueAddress,

    /// The inverted nibbles of the sector trailer access field disagree.
    #[error("sector trailer access bits inconsistent")]
    InvalidAccessBits,

    /// An access condition carries more than the three c1/c2/c3 bits.
    #[error("invalid access condition bits: {bits:#05b}")]
    InvalidAccessCondition { bits: u8 },

    /// Refused by the high-level flows: the addressed block is a sector
    /// trailer and would be clobbered by a plain data write.
    #[error("block {block} is a sector trailer")]
    TrailerBlock { block: u8 },

    /// Card search gave up without selecting a card.
    #[error("no card in field")]
    NoCard,

    /// The front-end did not answer within its deadline.
    #[error("operation timed out")]
    Timeout,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
