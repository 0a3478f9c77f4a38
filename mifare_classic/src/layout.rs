// mifare-classic-rs/mifare_classic/src/layout.rs

//! Card memory geometry.
//!
//! The first 32 sectors hold 4 blocks each; from block 128 on (S70 only)
//! sectors hold 16 blocks. Block and sector numbers both fit in a `u8` for
//! every supported card.

/// Sector number containing the given block.
pub fn block_to_sector(block: u8) -> u8 {
    if block < 32 * 4 {
        block / 4
    } else {
        32 + (block - 32 * 4) / 16
    }
}

/// Number of blocks in the given sector.
pub fn sector_block_count(sector: u8) -> u8 {
    if sector < 32 { 4 } else { 16 }
}

/// First block of the given sector.
pub fn sector_first_block(sector: u8) -> u8 {
    if sector < 32 {
        sector * 4
    } else {
        32 * 4 + (sector - 32) * 16
    }
}

/// Last block of the given sector (the sector trailer).
pub fn sector_last_block(sector: u8) -> u8 {
    sector_first_block(sector) + (sector_block_count(sector) - 1)
}

/// Whether the block is a sector trailer (keys + access bits).
pub fn is_trailer_block(block: u8) -> bool {
    sector_last_block(block_to_sector(block)) == block
}
