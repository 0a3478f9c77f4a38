// mifare-classic-rs/mifare_classic/src/device/builder.rs

use crate::device::handle::{Reader, Uninitialized};
use crate::transport::Transceiver;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
pub struct ReaderBuilder {
    transceiver: Option<Box<dyn Transceiver>>,
}

impl ReaderBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self { transceiver: None }
    }

    /// Provide an already-created front-end instance (e.g. MockTransceiver).
    pub fn with_transceiver(mut self, transceiver: Box<dyn Transceiver>) -> Self {
        self.transceiver = Some(transceiver);
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transceiver to have been provided.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        match self.transceiver {
            Some(t) => Ok(Reader::new(t)),
            None => Err(Error::Transport("no transceiver configured".into())),
        }
    }
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
