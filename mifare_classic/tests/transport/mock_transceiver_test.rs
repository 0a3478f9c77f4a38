use mifare_classic::Error;
use mifare_classic::transport::{MockTransceiver, Transceiver};

#[test]
fn records_every_exchange_in_order() {
    let mut m = MockTransceiver::new();
    m.push_response(vec![0x04, 0x00]);
    m.push_response(vec![0x0A]);

    m.transceive(&[0x26], 2).unwrap();
    m.transceive(&[0xA0, 0x04], 1).unwrap();

    assert_eq!(m.sent, vec![vec![0x26], vec![0xA0, 0x04]]);
    assert_eq!(m.pop_sent().unwrap(), vec![0xA0, 0x04]);
}

#[test]
fn empty_queue_is_a_timeout() {
    let mut m = MockTransceiver::new();
    assert!(matches!(m.transceive(&[0x26], 2), Err(Error::Timeout)));
    // The attempt is still recorded
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn injected_failures_are_consumed_first() {
    let mut m = MockTransceiver::new();
    m.push_response(vec![0x0A]);
    m.set_failures(2);

    assert!(matches!(m.transceive(&[0x30], 1), Err(Error::Transport(_))));
    assert!(matches!(m.transceive(&[0x30], 1), Err(Error::Transport(_))));
    assert_eq!(m.transceive(&[0x30], 1).unwrap(), vec![0x0A]);
}

#[test]
fn lifecycle_flags_and_delays() {
    let mut m = MockTransceiver::new();
    assert!(!m.inited);
    m.init().unwrap();
    m.delay_ms(200);
    m.delay_ms(50);
    m.close().unwrap();

    assert!(m.inited);
    assert!(m.closed);
    assert_eq!(m.delays, vec![200, 50]);
}
