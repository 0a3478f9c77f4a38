#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use mifare_classic::card::search;
use mifare_classic::test_support::initialized_mock_reader;
use mifare_classic::types::{AccessCondition, Key, KeyType, SectorPermission};

#[test]
fn set_then_get_sector_permission() {
    let key_a = Key::from_bytes([1, 2, 3, 4, 5, 6]);
    let key_b = Key::from_bytes([6, 5, 4, 3, 2, 1]);
    let perm = SectorPermission {
        block_0: AccessCondition::new(true, false, false),
        block_1: AccessCondition::DATA_TRANSPORT,
        block_2: AccessCondition::new(true, true, false),
        trailer: AccessCondition::new(false, true, true),
        user_data: 0x42,
    };

    let mut responses = fixtures::select_round();
    // set_permission: two write ACKs (auth has no data phase)
    responses.push(fixtures::ack());
    responses.push(fixtures::ack());
    // get_permission: the trailer image
    responses.push(fixtures::trailer_read_response(&key_a, &perm, &key_b));
    let mut reader = initialized_mock_reader(responses).unwrap();

    let card = search(&mut reader, Some(0)).unwrap();
    card.set_permission(
        &mut reader,
        1,
        KeyType::A,
        &Key::TRANSPORT,
        &key_a,
        &perm,
        &key_b,
    )
    .unwrap();

    let (read_perm, read_key_b) = card
        .get_permission(&mut reader, 1, KeyType::B, &key_b)
        .unwrap();
    assert_eq!(read_perm, perm);
    assert_eq!(read_key_b, key_b);
}

#[test]
fn permission_flow_targets_the_trailer_block() {
    // Sector 2's trailer is block 11; the authentication and the write
    // address frame must both carry it.
    let key_a = Key::TRANSPORT;
    let key_b = Key::TRANSPORT;
    let perm = SectorPermission::transport();

    let mut responses = fixtures::select_round();
    responses.push(fixtures::ack());
    responses.push(fixtures::ack());
    let mut reader = initialized_mock_reader(responses).unwrap();

    let card = search(&mut reader, Some(0)).unwrap();
    card.set_permission(
        &mut reader,
        2,
        KeyType::A,
        &Key::TRANSPORT,
        &key_a,
        &perm,
        &key_b,
    )
    .unwrap();
}
