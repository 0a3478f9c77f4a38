// Sector dump example.
//
// Drives the driver against the in-crate MockTransceiver so it runs without
// hardware: the mock is scripted with the exchanges an S50 card would
// answer. Swap the mock for a real front-end implementation to dump a
// physical card.

use mifare_classic::prelude::*;
use mifare_classic::protocol::crc::crc_a;

fn scripted_card() -> MockTransceiver {
    let mut mock = MockTransceiver::new();

    // Select round: ATQA, UID + BCC, SAK
    mock.push_response(vec![0x04, 0x00]);
    mock.push_response(vec![0x12, 0x34, 0x56, 0x78, 0x08]);
    mock.push_response(vec![0x08]);

    // Sector 1 data blocks: one read answer per block. The per-block
    // authentication handshakes carry no data phase.
    for block in 4u8..7 {
        let data = [block; 16];
        let mut response = data.to_vec();
        response.extend_from_slice(&crc_a(&data));
        mock.push_response(response);
    }

    mock
}

fn main() -> Result<()> {
    env_logger::init();

    let reader = Reader::new(Box::new(scripted_card()));
    let mut reader = reader.initialize()?;

    let card = search(&mut reader, Some(3))?;
    println!(
        "selected {} card, uid {}",
        card.card_type(),
        card.uid().to_hex()
    );

    let sector = 1u8;
    let first = mifare_classic::layout::sector_first_block(sector);
    let last = mifare_classic::layout::sector_last_block(sector);

    println!("sector {} (blocks {}..={})", sector, first, last);
    for block in first..=last {
        if mifare_classic::layout::is_trailer_block(block) {
            println!("  block {:3}: <sector trailer>", block);
            continue;
        }
        let data = card.read_block(&mut reader, block, KeyType::A, &Key::TRANSPORT)?;
        println!("  block {:3}: {}  |{}|", block, data.to_hex(), data.to_ascii_safe());
    }

    reader.halt();
    reader.close()
}
