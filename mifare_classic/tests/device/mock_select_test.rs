#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::fixtures;
use mifare_classic::device::Reader;
use mifare_classic::transport::{MockTransceiver, Transceiver};
use mifare_classic::types::CardType;
use mifare_classic::{Error, Result};

/// Transceiver wrapper that delegates into Rc<RefCell<MockTransceiver>> so a
/// test can inspect sent frames after the Reader takes ownership.
struct SharedTransceiver {
    inner: Rc<RefCell<MockTransceiver>>,
}

impl Transceiver for SharedTransceiver {
    fn init(&mut self) -> Result<()> {
        self.inner.borrow_mut().init()
    }
    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
    fn transceive(&mut self, tx: &[u8], rx_expect: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transceive(tx, rx_expect)
    }
    fn delay_ms(&mut self, ms: u32) {
        self.inner.borrow_mut().delay_ms(ms)
    }
}

#[test]
fn request_sends_reqa_and_detects_type() {
    let inner = Rc::new(RefCell::new(MockTransceiver::new()));
    inner.borrow_mut().push_response(fixtures::atqa_s50());

    let boxed: Box<dyn Transceiver> = Box::new(SharedTransceiver {
        inner: inner.clone(),
    });
    let mut reader = Reader::new(boxed).initialize().unwrap();

    assert_eq!(reader.request().unwrap(), CardType::S50);

    let sent = &inner.borrow().sent;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], vec![0x26]);
}

#[test]
fn full_select_sequence_on_the_wire() {
    let inner = Rc::new(RefCell::new(MockTransceiver::new()));
    for resp in fixtures::select_round() {
        inner.borrow_mut().push_response(resp);
    }

    let boxed: Box<dyn Transceiver> = Box::new(SharedTransceiver {
        inner: inner.clone(),
    });
    let mut reader = Reader::new(boxed).initialize().unwrap();

    reader.request().unwrap();
    let uid = reader.anticollision_cl1().unwrap();
    reader.select_cl1(uid).unwrap();

    let sent = inner.borrow().sent.clone();
    assert_eq!(sent[0], vec![0x26]);
    assert_eq!(sent[1], vec![0x93, 0x20]);
    assert_eq!(&sent[2][..2], &[0x93, 0x70]);
    assert_eq!(&sent[2][2..6], uid.as_bytes());
}

#[test]
fn cl2_operations_use_cl2_commands() {
    let inner = Rc::new(RefCell::new(MockTransceiver::new()));
    inner.borrow_mut().push_response(fixtures::uid_response());
    inner.borrow_mut().push_response(fixtures::sak_classic());

    let boxed: Box<dyn Transceiver> = Box::new(SharedTransceiver {
        inner: inner.clone(),
    });
    let mut reader = Reader::new(boxed).initialize().unwrap();

    let uid = reader.anticollision_cl2().unwrap();
    reader.select_cl2(uid).unwrap();

    let sent = inner.borrow().sent.clone();
    assert_eq!(sent[0], vec![0x95, 0x20]);
    assert_eq!(&sent[1][..2], &[0x95, 0x70]);
}

#[test]
fn select_rejects_foreign_sak() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0x20]); // ISO14443-4 card, not a Classic
    let mut reader = Reader::new(Box::new(mock)).initialize().unwrap();

    match reader.select_cl1(fixtures::sample_uid()) {
        Err(Error::SakError { sak: 0x20 }) => {}
        other => panic!("expected SakError, got {:?}", other),
    }
}

#[test]
fn halt_sends_frame_and_ignores_silence() {
    let inner = Rc::new(RefCell::new(MockTransceiver::new()));
    let boxed: Box<dyn Transceiver> = Box::new(SharedTransceiver {
        inner: inner.clone(),
    });
    let mut reader = Reader::new(boxed).initialize().unwrap();

    reader.halt();
    let sent = inner.borrow().sent.clone();
    assert_eq!(sent[0], vec![0x50, 0x00, 0x57, 0xCD]);
}
