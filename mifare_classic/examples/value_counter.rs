// Value block counter example.
//
// Formats a block as a value block, increments it twice and reads the
// result back, all against the scripted MockTransceiver. The script mirrors
// what an S50 card answers on the wire.

use anyhow::Result;
use mifare_classic::prelude::*;
use mifare_classic::protocol::{crc::crc_a, value_block};

const COUNTER_BLOCK: u8 = 5;

fn scripted_card() -> MockTransceiver {
    let mut mock = MockTransceiver::new();

    // Select round
    mock.push_response(vec![0x04, 0x00]);
    mock.push_response(vec![0xDE, 0xAD, 0xBE, 0xEF, 0xDE ^ 0xAD ^ 0xBE ^ 0xEF]);
    mock.push_response(vec![0x08]);

    // value_init: write begin ACK + write data ACK (the authentication
    // handshakes before each operation carry no data phase)
    mock.push_response(vec![0x0A]);
    mock.push_response(vec![0x0A]);

    // two increments: begin ACK (operand unanswered), then transfer ACK
    for _ in 0..2 {
        mock.push_response(vec![0x0A]);
        mock.push_response(vec![0x0A]);
    }

    // value_read: the final value block image
    let image = value_block::encode(120, COUNTER_BLOCK);
    let mut response = image.to_vec();
    response.extend_from_slice(&crc_a(&image));
    mock.push_response(response);

    mock
}

fn main() -> Result<()> {
    env_logger::init();

    let reader = Reader::new(Box::new(scripted_card()));
    let mut reader = reader.initialize()?;

    let card = search(&mut reader, Some(3))?;
    println!("card {} in field", card.uid().to_hex());

    let key = Key::TRANSPORT;
    card.value_init(&mut reader, COUNTER_BLOCK, 100, COUNTER_BLOCK, KeyType::A, &key)?;
    println!("counter formatted at block {} with value 100", COUNTER_BLOCK);

    for step in 0..2 {
        card.increment(&mut reader, COUNTER_BLOCK, 10, KeyType::A, &key)?;
        println!("increment #{} by 10", step + 1);
    }

    let (value, addr) = card.value_read(&mut reader, COUNTER_BLOCK, KeyType::A, &key)?;
    println!("counter now {} (backup addr {:#04x})", value, addr);

    reader.close()?;
    Ok(())
}
