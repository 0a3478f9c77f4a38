use mifare_classic::protocol::access_bits;
use mifare_classic::types::{AccessCondition, Key, SectorPermission};
use mifare_classic::Error;
use proptest::prelude::*;

#[test]
fn transport_access_field() {
    let access = access_bits::encode(&SectorPermission::transport());
    assert_eq!(access, [0xFF, 0x07, 0x80, 0x69]);
}

#[test]
fn inconsistent_nibbles_rejected() {
    let mut access = access_bits::encode(&SectorPermission::transport());
    access[0] ^= 0x01;
    assert!(matches!(
        access_bits::decode(&access),
        Err(Error::InvalidAccessBits)
    ));
}

#[test]
fn trailer_carries_keys_in_order() {
    let key_a = Key::from_bytes([0x0A; 6]);
    let key_b = Key::from_bytes([0x0B; 6]);
    let data = access_bits::encode_trailer(&key_a, &SectorPermission::transport(), &key_b);
    assert_eq!(&data[0..6], &[0x0A; 6]);
    assert_eq!(&data[10..16], &[0x0B; 6]);
}

fn arb_condition() -> impl Strategy<Value = AccessCondition> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(c1, c2, c3)| AccessCondition::new(c1, c2, c3))
}

proptest! {
    #[test]
    fn access_field_round_trip(b0 in arb_condition(), b1 in arb_condition(),
                               b2 in arb_condition(), trailer in arb_condition(),
                               user_data in any::<u8>()) {
        let perm = SectorPermission { block_0: b0, block_1: b1, block_2: b2, trailer, user_data };
        let decoded = access_bits::decode(&access_bits::encode(&perm)).unwrap();
        prop_assert_eq!(decoded, perm);
    }
}
