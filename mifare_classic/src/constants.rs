// mifare-classic-rs/mifare_classic/src/constants.rs
//! Command bytes and protocol constants used across the crate.

/// REQA: probe for cards in IDLE state.
pub const CMD_REQUEST: u8 = 0x26;

/// WUPA: probe for cards in IDLE or HALT state.
pub const CMD_WAKE_UP: u8 = 0x52;

/// Cascade level 1 anticollision (NVB fixed at 0x20, full frame).
pub const CMD_ANTICOLLISION_CL1: u16 = 0x9320;

/// Cascade level 1 select.
pub const CMD_SELECT_CL1: u16 = 0x9370;

/// Cascade level 2 anticollision.
pub const CMD_ANTICOLLISION_CL2: u16 = 0x9520;

/// Cascade level 2 select.
pub const CMD_SELECT_CL2: u16 = 0x9570;

/// HLTA: move the selected card to HALT state.
pub const CMD_HALT: u16 = 0x5000;

/// Crypto1 authentication with key A.
pub const CMD_AUTH_KEY_A: u8 = 0x60;

/// Crypto1 authentication with key B.
pub const CMD_AUTH_KEY_B: u8 = 0x61;

/// EV1 personalize UID usage.
pub const CMD_PERSONALIZE_UID: u8 = 0x40;

/// EV1 set load modulation strength.
pub const CMD_SET_MOD_TYPE: u8 = 0x43;

/// Read one 16-byte block.
pub const CMD_READ: u8 = 0x30;

/// Write one 16-byte block (two-step exchange).
pub const CMD_WRITE: u8 = 0xA0;

/// Decrement a value block into the internal register.
pub const CMD_DECREMENT: u8 = 0xC0;

/// Increment a value block into the internal register.
pub const CMD_INCREMENT: u8 = 0xC1;

/// Restore a value block into the internal register.
pub const CMD_RESTORE: u8 = 0xC2;

/// Transfer the internal register back into a block.
pub const CMD_TRANSFER: u8 = 0xB0;

/// 4-bit ACK answered to write/value command frames.
pub const ACK: u8 = 0x0A;

/// 4-bit NAK meaning "not permitted / not a value block".
pub const NAK_INVALID_OPERATION: u8 = 0x04;

/// SAK of a selected MIFARE Classic 1K.
pub const SAK_S50: u8 = 0x08;

/// SAK of a selected MIFARE Classic 4K.
pub const SAK_S70: u8 = 0x18;

/// ATQA of an S50 (1K) card.
pub const ATQA_S50: [u8; 2] = [0x04, 0x00];

/// ATQA of an S70 (4K) card.
pub const ATQA_S70: [u8; 2] = [0x02, 0x00];

/// Every MIFARE Classic block is 16 bytes.
pub const BLOCK_SIZE: usize = 16;

/// Authentication keys are 6 bytes.
pub const KEY_SIZE: usize = 6;

/// Single-size UID length at one cascade level.
pub const UID_SIZE: usize = 4;

/// Read response: 16 data bytes followed by CRC_A.
pub const READ_RESPONSE_LEN: usize = 18;
