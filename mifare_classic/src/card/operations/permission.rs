// mifare-classic-rs/mifare_classic/src/card/operations/permission.rs

use crate::card::Card;
use crate::device::{Initialized, Reader};
use crate::layout;
use crate::types::{Key, KeyType, SectorPermission};
use crate::Result;

/// Authenticate against the sector trailer and rewrite it: key A, packed
/// access conditions plus user byte, key B.
#[allow(clippy::too_many_arguments)]
pub fn set_permission(
    card: &Card,
    reader: &mut Reader<Initialized>,
    sector: u8,
    key_type: KeyType,
    key: &Key,
    key_a: &Key,
    perm: &SectorPermission,
    key_b: &Key,
) -> Result<()> {
    let block = layout::sector_last_block(sector);
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.set_sector_permission(sector, key_a, perm, key_b)
}

/// Authenticate against the sector trailer and read back its access
/// conditions and key B.
pub fn get_permission(
    card: &Card,
    reader: &mut Reader<Initialized>,
    sector: u8,
    key_type: KeyType,
    key: &Key,
) -> Result<(SectorPermission, Key)> {
    let block = layout::sector_last_block(sector);
    reader.authenticate(*card.uid(), block, key_type, key)?;
    reader.get_sector_permission(sector)
}
