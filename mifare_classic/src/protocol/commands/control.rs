// mifare-classic-rs/mifare_classic/src/protocol/commands/control.rs

use crate::constants;
use crate::protocol::crc::append_crc_a;
use crate::types::{LoadModulation, PersonalizedUid};

/// Encode HLTA: 0x50 0x00 plus CRC.
pub fn encode_halt() -> Vec<u8> {
    let mut out = vec![
        (constants::CMD_HALT >> 8) as u8,
        (constants::CMD_HALT & 0xFF) as u8,
    ];
    append_crc_a(&mut out);
    out
}

/// Encode the EV1 load modulation command.
pub fn encode_set_modulation(mode: LoadModulation) -> Vec<u8> {
    let mut out = vec![constants::CMD_SET_MOD_TYPE, mode as u8];
    append_crc_a(&mut out);
    out
}

/// Encode the EV1 personalize UID usage command.
pub fn encode_personalize_uid(usage: PersonalizedUid) -> Vec<u8> {
    let mut out = vec![constants::CMD_PERSONALIZE_UID, usage as u8];
    append_crc_a(&mut out);
    out
}
