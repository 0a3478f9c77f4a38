// mifare-classic-rs/mifare_classic/src/types.rs

use crate::constants;
use crate::Error;
use std::convert::TryFrom;

/// Uid - Newtype Pattern (4 bytes, one cascade level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 4]);

impl Uid {
    /// Wrap raw UID bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw UID bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// XOR check byte transmitted after the UID during anticollision.
    pub fn bcc(&self) -> u8 {
        self.0.iter().fold(0, |acc, &b| acc ^ b)
    }

    /// Lowercase hex rendering, e.g. for log output.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != constants::UID_SIZE {
            return Err(Error::InvalidLength {
                expected: constants::UID_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}

/// Key - Newtype Pattern (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key([u8; 6]);

impl Key {
    /// Factory transport key (all 0xFF), valid on blank cards.
    pub const TRANSPORT: Self = Self([0xFF; 6]);

    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::TRANSPORT
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != constants::KEY_SIZE {
            return Err(Error::InvalidLength {
                expected: constants::KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(&bytes[..6]);
        Ok(Self(arr))
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap raw block bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw block bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Spaced hex rendering for dumps.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// ASCII rendering with non-printable bytes replaced by '.'.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != constants::BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: constants::BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}

/// Card generation, detected from ATQA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// MIFARE Classic 1K: 16 sectors of 4 blocks.
    #[display(fmt = "s50")]
    S50,
    /// MIFARE Classic 4K: 32 sectors of 4 blocks plus 8 sectors of 16.
    #[display(fmt = "s70")]
    S70,
}

impl CardType {
    /// Map an ATQA answer to a card generation.
    pub fn from_atqa(atqa: [u8; 2]) -> Option<Self> {
        match atqa {
            constants::ATQA_S50 => Some(Self::S50),
            constants::ATQA_S70 => Some(Self::S70),
            _ => None,
        }
    }

    /// The ATQA this generation answers to REQA/WUPA.
    pub fn atqa(&self) -> [u8; 2] {
        match self {
            Self::S50 => constants::ATQA_S50,
            Self::S70 => constants::ATQA_S70,
        }
    }

    /// Number of sectors on the card.
    pub fn sector_count(&self) -> u8 {
        match self {
            Self::S50 => 16,
            Self::S70 => 40,
        }
    }

    /// Number of 16-byte blocks on the card.
    pub fn total_blocks(&self) -> u16 {
        match self {
            Self::S50 => 64,
            Self::S70 => 256,
        }
    }
}

/// Which of the two sector keys to authenticate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    /// Sector key A.
    #[display(fmt = "key a")]
    A,
    /// Sector key B.
    #[display(fmt = "key b")]
    B,
}

impl KeyType {
    /// The authentication command byte for this key.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::A => constants::CMD_AUTH_KEY_A,
            Self::B => constants::CMD_AUTH_KEY_B,
        }
    }
}

/// EV1 load modulation strength.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadModulation {
    /// Normal load modulation.
    Normal = 0x00,
    /// Strong load modulation.
    Strong = 0x01,
}

/// EV1 personalized UID usage, per ISO/IEC 14443-3 anticollision variants.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalizedUid {
    /// Anticollision and selection with the double-size UID.
    DoubleSize = 0x00,
    /// Double-size UID with the optional selection shortcut.
    DoubleSizeShortcut = 0x40,
    /// Single-size random ID.
    RandomId = 0x20,
    /// Single-size NUID calculated from the 7-byte UID.
    Nuid = 0x60,
}

/// A validated 3-bit c1/c2/c3 access condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessCondition(u8);

impl AccessCondition {
    /// Transport configuration for data blocks (c1c2c3 = 000: any key,
    /// any operation).
    pub const DATA_TRANSPORT: Self = Self(0b000);

    /// Transport configuration for the sector trailer (c1c2c3 = 001).
    pub const TRAILER_TRANSPORT: Self = Self(0b001);

    /// Build from individual condition bits.
    pub fn new(c1: bool, c2: bool, c3: bool) -> Self {
        Self(((c1 as u8) << 2) | ((c2 as u8) << 1) | (c3 as u8))
    }

    /// The packed c1c2c3 bits (0..=7).
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AccessCondition {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if bits > 0b111 {
            return Err(Error::InvalidAccessCondition { bits });
        }
        Ok(Self(bits))
    }
}

/// Access conditions of one sector, as carried by the trailer access field.
///
/// On S70 sectors with 16 blocks the three data conditions govern 5-block
/// groups (0-4, 5-9, 10-14) instead of single blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorPermission {
    /// Data block 0 (blocks 0-4 on a 16-block sector).
    pub block_0: AccessCondition,
    /// Data block 1 (blocks 5-9 on a 16-block sector).
    pub block_1: AccessCondition,
    /// Data block 2 (blocks 10-14 on a 16-block sector).
    pub block_2: AccessCondition,
    /// The sector trailer itself.
    pub trailer: AccessCondition,
    /// Free user byte stored alongside the access bits.
    pub user_data: u8,
}

impl SectorPermission {
    /// Factory transport configuration of a blank card.
    pub fn transport() -> Self {
        Self {
            block_0: AccessCondition::DATA_TRANSPORT,
            block_1: AccessCondition::DATA_TRANSPORT,
            block_2: AccessCondition::DATA_TRANSPORT,
            trailer: AccessCondition::TRAILER_TRANSPORT,
            user_data: 0x69,
        }
    }
}
