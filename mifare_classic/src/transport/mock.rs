// mifare-classic-rs/mifare_classic/src/transport/mock.rs

use crate::transport::traits::Transceiver;
use crate::{Error, Result};

/// Mock transceiver for unit tests. It records transmitted frames and
/// requested delays, and returns queued responses in order.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    /// Every frame handed to `transceive`, in order.
    pub sent: Vec<Vec<u8>>,
    /// Queued responses, consumed front-first.
    pub responses: Vec<Vec<u8>>,
    /// Delays requested through `delay_ms`.
    pub delays: Vec<u32>,
    /// Testing hook: number of subsequent transceive calls that should fail.
    pub failures: usize,
    /// Whether `init` has been called.
    pub inited: bool,
    /// Whether `close` has been called.
    pub closed: bool,
}

impl MockTransceiver {
    /// Fresh mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next exchange.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Set how many subsequent transceive calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Take the most recently sent frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transceiver for MockTransceiver {
    fn init(&mut self) -> Result<()> {
        self.inited = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }

    fn transceive(&mut self, tx: &[u8], rx_expect: usize) -> Result<Vec<u8>> {
        self.sent.push(tx.to_vec());
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Transport("injected failure".into()));
        }
        // Exchanges without a data phase (authentication, fire-and-forget
        // frames) succeed without consuming a scripted response, so a
        // queued script stays aligned with the answered exchanges.
        if rx_expect == 0 {
            return Ok(Vec::new());
        }
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}
