// mifare-classic-rs/mifare_classic/src/card/operations/mod.rs

pub mod permission;
pub mod read;
pub mod search;
pub mod value;
pub mod write;

pub use search::search;

use crate::{Error, Result, layout};

/// The data-block flows must not touch sector trailers; clobbering one
/// changes the sector's keys and access bits.
pub(crate) fn reject_trailer(block: u8) -> Result<()> {
    if layout::is_trailer_block(block) {
        return Err(Error::TrailerBlock { block });
    }
    Ok(())
}
