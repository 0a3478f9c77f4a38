// mifare-classic-rs/mifare_classic/src/card/operations/write.rs

use crate::card::Card;
use crate::card::operations::reject_trailer;
use crate::device::{Initialized, Reader};
use crate::types::{BlockData, Key, KeyType};
use crate::Result;

/// Authenticate the block's sector and write the block. Sector trailers
/// are refused; use the permission flow for those.
pub fn write_block(
    card: &Card,
    reader: &mut Reader<Initialized>,
    block: u8,
    data: &BlockData,
    key_type: KeyType,
    key: &Key,
) -> Result<()> {
    reject_trailer(block)?;
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.write(block, data)
}
