// mifare-classic-rs/mifare_classic/src/protocol/commands/auth.rs

use crate::types::{Key, KeyType, Uid};

/// Encode a Crypto1 authentication request:
/// command + block + key(6) + uid(4), 12 bytes, no CRC.
///
/// The contactless front-end performs the actual challenge/response; the
/// driver only hands it the parameters.
pub fn encode_authenticate(block: u8, key_type: KeyType, key: Key, uid: Uid) -> Vec<u8> {
    let mut out = Vec::with_capacity(12);
    out.push(key_type.command_code());
    out.push(block);
    out.extend_from_slice(key.as_bytes());
    out.extend_from_slice(uid.as_bytes());
    out
}
