#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use mifare_classic::protocol::Command;
use mifare_classic::protocol::crc::crc_a;
use mifare_classic::types::{BlockData, Key, KeyType, LoadModulation};

#[test]
fn probe_frames() {
    assert_eq!(Command::Request.encode(), vec![0x26]);
    assert_eq!(Command::WakeUp.encode(), vec![0x52]);
    assert_eq!(Command::Halt.encode(), vec![0x50, 0x00, 0x57, 0xCD]);
}

#[test]
fn select_frame_carries_uid_and_bcc() {
    let uid = fixtures::sample_uid();
    let frame = Command::SelectCl1 { uid }.encode();

    assert_eq!(frame.len(), 9);
    assert_eq!(&frame[..2], &[0x93, 0x70]);
    assert_eq!(&frame[2..6], uid.as_bytes());
    assert_eq!(frame[6], uid.bcc());
    assert_eq!(&frame[7..], &crc_a(&frame[..7]));
}

#[test]
fn authenticate_frame_layout() {
    let uid = fixtures::sample_uid();
    let key = Key::from_bytes([1, 2, 3, 4, 5, 6]);
    let cmd = Command::Authenticate {
        block: 0x3C,
        key_type: KeyType::B,
        key,
        uid,
    };

    let frame = cmd.encode();
    assert_eq!(frame.len(), 12);
    assert_eq!(frame[0], 0x61);
    assert_eq!(frame[1], 0x3C);
    assert_eq!(&frame[2..8], key.as_bytes());
    assert_eq!(&frame[8..12], uid.as_bytes());
    assert_eq!(cmd.response_len(), 0);
}

#[test]
fn write_frames_are_two_step() {
    let begin = Command::WriteBegin { block: 4 }.encode();
    assert_eq!(&begin[..2], &[0xA0, 0x04]);
    assert_eq!(begin.len(), 4);

    let data = BlockData::from_bytes([0x11; 16]);
    let phase2 = Command::WriteData { data }.encode();
    assert_eq!(phase2.len(), 18);
    assert_eq!(&phase2[..16], data.as_bytes());
}

#[test]
fn value_command_bytes() {
    assert_eq!(Command::IncrementBegin { block: 5 }.encode()[0], 0xC1);
    assert_eq!(Command::DecrementBegin { block: 5 }.encode()[0], 0xC0);
    assert_eq!(Command::RestoreBegin { block: 5 }.encode()[0], 0xC2);
    assert_eq!(Command::Transfer { block: 5 }.encode()[0], 0xB0);

    let operand = Command::ValueOperand { value: 1 }.encode();
    assert_eq!(&operand[..4], &[0x01, 0x00, 0x00, 0x00]);
    assert_eq!(Command::ValueOperand { value: 1 }.response_len(), 0);
}

#[test]
fn control_frames_expect_ack() {
    let cmd = Command::SetModulation(LoadModulation::Normal);
    assert_eq!(&cmd.encode()[..2], &[0x43, 0x00]);
    assert_eq!(cmd.response_len(), 1);
}
