// mifare-classic-rs/mifare_classic/src/protocol/crc.rs

//! ISO/IEC 14443-3 CRC_A.
//!
//! Initial value 0x6363, appended to frames LSB-first. Card read responses
//! carry the same CRC over their 16 data bytes.

/// Compute CRC_A over `data`, returned as [lsb, msb].
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0x6363;
    for &byte in data {
        let mut bt = byte ^ (crc & 0x00FF) as u8;
        bt ^= bt << 4;
        crc = (crc >> 8) ^ ((bt as u16) << 8) ^ ((bt as u16) << 3) ^ ((bt as u16) >> 4);
    }
    [(crc & 0xFF) as u8, (crc >> 8) as u8]
}

/// Append CRC_A over the current buffer contents.
pub fn append_crc_a(buf: &mut Vec<u8>) {
    let crc = crc_a(buf);
    buf.extend_from_slice(&crc);
}
