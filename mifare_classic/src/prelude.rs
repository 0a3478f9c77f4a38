// mifare-classic-rs/mifare_classic/src/prelude.rs

//! Convenience re-exports of the common crate surface.

pub use crate::card::{Card, search};
pub use crate::device::{DriverInfo, Initialized, Reader, ReaderBuilder, Uninitialized, driver_info};
pub use crate::protocol::Command;
pub use crate::transport::{MockTransceiver, Transceiver};
pub use crate::{
    AccessCondition, BlockData, CardType, Error, Key, KeyType, LoadModulation, PersonalizedUid,
    Result, SectorPermission, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_search_delay, ms, parse_hex};
