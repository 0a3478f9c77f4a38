// mifare-classic-rs/mifare_classic/src/lib.rs

//! mifare_classic
//!
//! Pure Rust driver for MIFARE Classic (S50/S70) contactless cards.
//!
//! The crate speaks the ISO/IEC 14443-3 Type A card command set through a
//! pluggable contactless front-end (see [`transport::Transceiver`]). It owns
//! command framing, CRC/BCC/ACK validation, card memory geometry, the
//! value-block and sector-trailer codecs, and the authenticated high-level
//! flows. The radio itself (RC522, PN532, ...) is supplied by the integrator.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod layout;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
