// mifare-classic-rs/mifare_classic/src/card/operations/search.rs

use log::debug;

use crate::card::Card;
use crate::device::{Initialized, Reader};
use crate::utils::DEFAULT_SEARCH_DELAY_MS;
use crate::{Error, Result};

/// Poll for a card: request, anticollision CL1, select CL1. Retries with
/// the default inter-poll delay until a card is selected. `attempts`
/// bounds the number of retries after the first round; `None` polls
/// forever.
pub fn search(reader: &mut Reader<Initialized>, attempts: Option<u32>) -> Result<Card> {
    let mut remaining = attempts;

    loop {
        match try_select(reader) {
            Ok(card) => {
                debug!("selected {} card {}", card.card_type(), card.uid().to_hex());
                return Ok(card);
            }
            Err(e) => debug!("search round failed: {}", e),
        }

        reader.delay_ms(DEFAULT_SEARCH_DELAY_MS);

        match remaining {
            None => continue,
            Some(0) => return Err(Error::NoCard),
            Some(n) => remaining = Some(n - 1),
        }
    }
}

fn try_select(reader: &mut Reader<Initialized>) -> Result<Card> {
    let card_type = reader.request()?;
    let uid = reader.anticollision_cl1()?;
    reader.select_cl1(uid)?;
    Ok(Card::new(uid, card_type))
}
