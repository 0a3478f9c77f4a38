// mifare-classic-rs/mifare_classic/src/card/operations/value.rs

use crate::card::Card;
use crate::card::operations::reject_trailer;
use crate::device::{Initialized, Reader};
use crate::types::{Key, KeyType};
use crate::Result;

/// Authenticate and format a block as a value block.
pub fn value_init(
    card: &Card,
    reader: &mut Reader<Initialized>,
    block: u8,
    value: i32,
    addr: u8,
    key_type: KeyType,
    key: &Key,
) -> Result<()> {
    reject_trailer(block)?;
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.value_init(block, value, addr)
}

/// Authenticate and overwrite a value block.
pub fn value_write(
    card: &Card,
    reader: &mut Reader<Initialized>,
    block: u8,
    value: i32,
    addr: u8,
    key_type: KeyType,
    key: &Key,
) -> Result<()> {
    reject_trailer(block)?;
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.value_write(block, value, addr)
}

/// Authenticate and read back a value block.
pub fn value_read(
    card: &Card,
    reader: &mut Reader<Initialized>,
    block: u8,
    key_type: KeyType,
    key: &Key,
) -> Result<(i32, u8)> {
    reject_trailer(block)?;
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.value_read(block)
}

/// Authenticate, increment the value block and transfer the register
/// back so the new value is durable.
pub fn increment(
    card: &Card,
    reader: &mut Reader<Initialized>,
    block: u8,
    value: u32,
    key_type: KeyType,
    key: &Key,
) -> Result<()> {
    reject_trailer(block)?;
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.increment(block, value)?;
    reader.transfer(block)
}

/// Authenticate, decrement the value block and transfer the register back.
pub fn decrement(
    card: &Card,
    reader: &mut Reader<Initialized>,
    block: u8,
    value: u32,
    key_type: KeyType,
    key: &Key,
) -> Result<()> {
    reject_trailer(block)?;
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.decrement(block, value)?;
    reader.transfer(block)
}
