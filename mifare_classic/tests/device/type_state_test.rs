use mifare_classic::device::{Reader, ReaderBuilder};
use mifare_classic::transport::MockTransceiver;

#[test]
fn initialize_then_close() {
    let reader = Reader::new(Box::new(MockTransceiver::new()));
    let initialized = reader.initialize().unwrap();
    initialized.close().unwrap();
}

#[test]
fn builder_produces_working_reader() {
    let reader = ReaderBuilder::new()
        .with_transceiver(Box::new(MockTransceiver::new()))
        .build_uninitialized()
        .unwrap();
    let mut initialized = reader.initialize().unwrap();
    // No card in the field: request times out but the handle stays usable
    assert!(initialized.request().is_err());
    assert_eq!(initialized.card_type(), None);
}

#[test]
fn builder_requires_transceiver() {
    assert!(ReaderBuilder::new().build_uninitialized().is_err());
}
