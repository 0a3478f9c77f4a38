// mifare-classic-rs/mifare_classic/src/protocol/access_bits.rs

//! Sector trailer codec.
//!
//! A trailer is `key_a(6) access(4) key_b(6)`. The access field packs the
//! four 3-bit c1/c2/c3 conditions column-wise, each column stored both
//! plain and inverted so a torn write is detectable:
//!
//! ```text
//! access[0] = ~c2 | ~c1      (high/low nibble)
//! access[1] =  c1 | ~c3
//! access[2] =  c3 |  c2
//! access[3] = user data
//! ```
//!
//! Bit i of a nibble belongs to block i (bit 3 = the trailer).

use crate::types::{AccessCondition, Key, SectorPermission};
use crate::{Error, Result};

/// Pack the four access conditions and the user byte into the 4-byte
/// access field.
pub fn encode(perm: &SectorPermission) -> [u8; 4] {
    let conditions = [
        perm.block_0.bits(),
        perm.block_1.bits(),
        perm.block_2.bits(),
        perm.trailer.bits(),
    ];

    let nibble = |bit: u8| -> u8 {
        conditions
            .iter()
            .enumerate()
            .fold(0, |acc, (i, c)| acc | (((c >> bit) & 0x1) << i))
    };
    let part_1 = nibble(2); // c1 column
    let part_2 = nibble(1); // c2 column
    let part_3 = nibble(0); // c3 column

    [
        ((0xF - part_2) << 4) | (0xF - part_1),
        (part_1 << 4) | (0xF - part_3),
        (part_3 << 4) | part_2,
        perm.user_data,
    ]
}

/// Unpack a 4-byte access field, validating every inverted nibble against
/// its plain copy.
pub fn decode(access: &[u8; 4]) -> Result<SectorPermission> {
    let part_2_r = (access[0] >> 4) & 0xF;
    let part_1_r = access[0] & 0xF;
    let part_1 = (access[1] >> 4) & 0xF;
    let part_3_r = access[1] & 0xF;
    let part_3 = (access[2] >> 4) & 0xF;
    let part_2 = access[2] & 0xF;

    if part_1 + part_1_r != 0xF || part_2 + part_2_r != 0xF || part_3 + part_3_r != 0xF {
        return Err(Error::InvalidAccessBits);
    }

    let condition = |index: u8| -> AccessCondition {
        AccessCondition::new(
            (part_1 >> index) & 0x1 == 1,
            (part_2 >> index) & 0x1 == 1,
            (part_3 >> index) & 0x1 == 1,
        )
    };

    Ok(SectorPermission {
        block_0: condition(0),
        block_1: condition(1),
        block_2: condition(2),
        trailer: condition(3),
        user_data: access[3],
    })
}

/// Build a full 16-byte trailer image: key A, access field, key B.
pub fn encode_trailer(key_a: &Key, perm: &SectorPermission, key_b: &Key) -> [u8; 16] {
    let mut data = [0u8; 16];
    data[0..6].copy_from_slice(key_a.as_bytes());
    data[6..10].copy_from_slice(&encode(perm));
    data[10..16].copy_from_slice(key_b.as_bytes());
    data
}

/// Split a trailer image read back from the card into its permissions and
/// key B. Key A always reads as zeros on-card and is not returned.
pub fn decode_trailer(data: &[u8; 16]) -> Result<(SectorPermission, Key)> {
    let mut access = [0u8; 4];
    access.copy_from_slice(&data[6..10]);
    let perm = decode(&access)?;

    let mut key_b = [0u8; 6];
    key_b.copy_from_slice(&data[10..16]);
    Ok((perm, Key::from_bytes(key_b)))
}
