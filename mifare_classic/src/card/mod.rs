// mifare-classic-rs/mifare_classic/src/card/mod.rs

//! High-level card flows: search/select, and authenticated block, value
//! and permission operations.

use crate::device::{Initialized, Reader};
use crate::types::{BlockData, CardType, Key, KeyType, SectorPermission, Uid};
use crate::Result;

pub mod operations;

pub use operations::search;

/// A selected card: its single-size UID and detected generation.
pub struct Card {
    uid: Uid,
    card_type: CardType,
}

impl Card {
    /// Wrap an already-selected card.
    pub fn new(uid: Uid, card_type: CardType) -> Self {
        Self { uid, card_type }
    }

    /// The UID captured during anticollision.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// The generation detected from ATQA.
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Authenticate and read a data block. Sector trailers are refused.
    pub fn read_block(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        key_type: KeyType,
        key: &Key,
    ) -> Result<BlockData> {
        operations::read::read_block(self, reader, block, key_type, key)
    }

    /// Authenticate and write a data block. Sector trailers are refused.
    pub fn write_block(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        data: &BlockData,
        key_type: KeyType,
        key: &Key,
    ) -> Result<()> {
        operations::write::write_block(self, reader, block, data, key_type, key)
    }

    /// Authenticate and format a block as a value block.
    pub fn value_init(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        value: i32,
        addr: u8,
        key_type: KeyType,
        key: &Key,
    ) -> Result<()> {
        operations::value::value_init(self, reader, block, value, addr, key_type, key)
    }

    /// Authenticate and overwrite a value block.
    pub fn value_write(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        value: i32,
        addr: u8,
        key_type: KeyType,
        key: &Key,
    ) -> Result<()> {
        operations::value::value_write(self, reader, block, value, addr, key_type, key)
    }

    /// Authenticate and read back a value block.
    pub fn value_read(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        key_type: KeyType,
        key: &Key,
    ) -> Result<(i32, u8)> {
        operations::value::value_read(self, reader, block, key_type, key)
    }

    /// Authenticate, increment a value block and transfer the result back.
    pub fn increment(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        value: u32,
        key_type: KeyType,
        key: &Key,
    ) -> Result<()> {
        operations::value::increment(self, reader, block, value, key_type, key)
    }

    /// Authenticate, decrement a value block and transfer the result back.
    pub fn decrement(
        &self,
        reader: &mut Reader<Initialized>,
        block: u8,
        value: u32,
        key_type: KeyType,
        key: &Key,
    ) -> Result<()> {
        operations::value::decrement(self, reader, block, value, key_type, key)
    }

    /// Authenticate against a sector trailer and rewrite its keys and
    /// access conditions.
    #[allow(clippy::too_many_arguments)]
    pub fn set_permission(
        &self,
        reader: &mut Reader<Initialized>,
        sector: u8,
        key_type: KeyType,
        key: &Key,
        key_a: &Key,
        perm: &SectorPermission,
        key_b: &Key,
    ) -> Result<()> {
        operations::permission::set_permission(
            self, reader, sector, key_type, key, key_a, perm, key_b,
        )
    }

    /// Authenticate against a sector trailer and read back its access
    /// conditions and key B.
    pub fn get_permission(
        &self,
        reader: &mut Reader<Initialized>,
        sector: u8,
        key_type: KeyType,
        key: &Key,
    ) -> Result<(SectorPermission, Key)> {
        operations::permission::get_permission(self, reader, sector, key_type, key)
    }
}
