// mifare-classic-rs/mifare_classic/src/transport/traits.rs

use crate::Result;

/// Transceiver abstracts the contactless RF front-end away from the
/// driver logic. Implementations wrap a reader chip (RC522, PN532, ...)
/// that holds the ISO/IEC 14443 field, performs bit-level framing with
/// parity, and executes the Crypto1 handshake on request.
pub trait Transceiver {
    /// Bring the RF field and the front-end chip up.
    fn init(&mut self) -> Result<()>;

    /// Drop the field and release the front-end.
    fn close(&mut self) -> Result<()>;

    /// Perform one command/response exchange. `rx_expect` is the response
    /// length the driver anticipates; pass 0 for exchanges without a data
    /// phase (authentication, fire-and-forget frames). Implementations
    /// return the bytes actually received, which the driver validates.
    fn transceive(&mut self, tx: &[u8], rx_expect: usize) -> Result<Vec<u8>>;

    /// Sleep for at least `ms` milliseconds. Kept on the trait so embedded
    /// integrations can plug their own timer instead of a thread sleep.
    fn delay_ms(&mut self, ms: u32);
}
