// mifare-classic-rs/mifare_classic/src/card/operations/read.rs

use crate::card::Card;
use crate::card::operations::reject_trailer;
use crate::device::{Initialized, Reader};
use crate::types::{BlockData, Key, KeyType};
use crate::Result;

/// Authenticate the block's sector and read the block. Sector trailers
/// are refused; use the permission flow for those.
pub fn read_block(
    card: &Card,
    reader: &mut Reader<Initialized>,
    block: u8,
    key_type: KeyType,
    key: &Key,
) -> Result<BlockData> {
    reject_trailer(block)?;
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.read(block)
}
