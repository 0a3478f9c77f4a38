#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use mifare_classic::card::search;
use mifare_classic::test_support::initialized_mock_reader;
use mifare_classic::types::{BlockData, CardType, Key, KeyType};
use mifare_classic::Error;

#[test]
fn search_then_read_a_block() {
    let mut responses = fixtures::select_round();
    responses.push(fixtures::read_response([0x33; 16])); // auth has no data phase
    let mut reader = initialized_mock_reader(responses).unwrap();

    let card = search(&mut reader, Some(0)).unwrap();
    assert_eq!(card.card_type(), CardType::S50);
    assert_eq!(card.uid(), &fixtures::sample_uid());

    let data = card
        .read_block(&mut reader, 1, KeyType::A, &Key::TRANSPORT)
        .unwrap();
    assert_eq!(data.as_bytes(), &[0x33; 16]);
}

#[test]
fn search_then_write_a_block() {
    let mut responses = fixtures::select_round();
    responses.push(fixtures::ack()); // write begin
    responses.push(fixtures::ack()); // write data
    let mut reader = initialized_mock_reader(responses).unwrap();

    let card = search(&mut reader, Some(0)).unwrap();
    card.write_block(
        &mut reader,
        2,
        &BlockData::from_bytes([0x44; 16]),
        KeyType::B,
        &fixtures::sample_key(),
    )
    .unwrap();
}

#[test]
fn data_flows_refuse_the_trailer() {
    let mut reader = initialized_mock_reader(fixtures::select_round()).unwrap();
    let card = search(&mut reader, Some(0)).unwrap();

    assert!(matches!(
        card.read_block(&mut reader, 3, KeyType::A, &Key::TRANSPORT),
        Err(Error::TrailerBlock { block: 3 })
    ));
    assert!(matches!(
        card.value_read(&mut reader, 7, KeyType::A, &Key::TRANSPORT),
        Err(Error::TrailerBlock { block: 7 })
    ));
}

#[test]
fn value_counter_lifecycle() {
    let mut responses = fixtures::select_round();
    // value_init: two write ACKs
    responses.push(fixtures::ack());
    responses.push(fixtures::ack());
    // increment: begin ACK (operand unanswered), then transfer ACK
    responses.push(fixtures::ack());
    responses.push(fixtures::ack());
    // value_read: the block image
    responses.push(fixtures::value_read_response(30, 0x05));
    let mut reader = initialized_mock_reader(responses).unwrap();

    let card = search(&mut reader, Some(0)).unwrap();
    let key = Key::TRANSPORT;

    card.value_init(&mut reader, 5, 20, 0x05, KeyType::A, &key)
        .unwrap();
    card.increment(&mut reader, 5, 10, KeyType::A, &key).unwrap();

    let (value, addr) = card
        .value_read(&mut reader, 5, KeyType::A, &key)
        .unwrap();
    assert_eq!(value, 30);
    assert_eq!(addr, 0x05);
}

#[test]
fn decrement_flow_transfers_result() {
    let mut responses = fixtures::select_round();
    responses.push(fixtures::ack()); // decrement begin
    responses.push(fixtures::ack()); // transfer
    let mut reader = initialized_mock_reader(responses).unwrap();

    let card = search(&mut reader, Some(0)).unwrap();
    card.decrement(&mut reader, 6, 5, KeyType::A, &Key::TRANSPORT)
        .unwrap();
}
