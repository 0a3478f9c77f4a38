// mifare-classic-rs/mifare_classic/src/protocol/mod.rs

//! Wire-level protocol: command framing, CRC, and response validation.

pub mod access_bits;
pub mod commands;
pub mod crc;
pub mod responses;
pub mod value_block;

pub use commands::Command;
