use mifare_classic::protocol::crc::{append_crc_a, crc_a};

#[test]
fn known_frames() {
    // HLTA and READ(0), as seen on the wire
    assert_eq!(crc_a(&[0x50, 0x00]), [0x57, 0xCD]);
    assert_eq!(crc_a(&[0x30, 0x00]), [0x02, 0xA8]);
}

#[test]
fn append_produces_verifiable_frame() {
    let mut frame = vec![0xA0, 0x3C];
    append_crc_a(&mut frame);
    assert_eq!(frame.len(), 4);
    assert_eq!(&frame[2..], &crc_a(&[0xA0, 0x3C]));
}

#[test]
fn crc_depends_on_every_byte() {
    let a = crc_a(&[0x30, 0x01]);
    let b = crc_a(&[0x30, 0x02]);
    let c = crc_a(&[0x31, 0x01]);
    assert_ne!(a, b);
    assert_ne!(a, c);
}
