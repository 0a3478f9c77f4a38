// mifare-classic-rs/mifare_classic/src/protocol/commands/select.rs

use crate::constants;
use crate::protocol::crc::append_crc_a;
use crate::types::Uid;

/// Encode REQA. Short frame, no CRC.
pub fn encode_request() -> Vec<u8> {
    vec![constants::CMD_REQUEST]
}

/// Encode WUPA. Short frame, no CRC.
pub fn encode_wake_up() -> Vec<u8> {
    vec![constants::CMD_WAKE_UP]
}

fn encode_anticollision(command: u16) -> Vec<u8> {
    // NVB is part of the command word (0x20 = full frame, no known bits).
    vec![(command >> 8) as u8, (command & 0xFF) as u8]
}

/// Encode cascade level 1 anticollision.
pub fn encode_anticollision_cl1() -> Vec<u8> {
    encode_anticollision(constants::CMD_ANTICOLLISION_CL1)
}

/// Encode cascade level 2 anticollision.
pub fn encode_anticollision_cl2() -> Vec<u8> {
    encode_anticollision(constants::CMD_ANTICOLLISION_CL2)
}

fn encode_select(command: u16, uid: Uid) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    out.push((command >> 8) as u8);
    out.push((command & 0xFF) as u8);
    out.extend_from_slice(uid.as_bytes());
    out.push(uid.bcc());
    append_crc_a(&mut out);
    out
}

/// Encode cascade level 1 select: command + UID + BCC + CRC.
pub fn encode_select_cl1(uid: Uid) -> Vec<u8> {
    encode_select(constants::CMD_SELECT_CL1, uid)
}

/// Encode cascade level 2 select.
pub fn encode_select_cl2(uid: Uid) -> Vec<u8> {
    encode_select(constants::CMD_SELECT_CL2, uid)
}
