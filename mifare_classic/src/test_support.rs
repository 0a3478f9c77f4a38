//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransceiver setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::{device, transport, Result};

/// Build a MockTransceiver pre-seeded with the given responses and return
/// it boxed as a Transceiver trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn transport::Transceiver> {
    let mut mock = transport::MockTransceiver::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: create and initialize a Reader<Initialized> backed by a
/// MockTransceiver pre-seeded with the provided responses, in the order
/// the exchanges will consume them.
#[doc(hidden)]
pub fn initialized_mock_reader(
    responses: Vec<Vec<u8>>,
) -> Result<device::Reader<device::Initialized>> {
    let boxed = boxed_mock_with_responses(responses);
    let reader = device::Reader::new(boxed);
    reader.initialize()
}

/// Responses for a complete search round: ATQA (S50), UID+BCC, SAK.
#[doc(hidden)]
pub fn select_responses(uid: [u8; 4]) -> Vec<Vec<u8>> {
    let bcc = uid.iter().fold(0, |acc, &b| acc ^ b);
    vec![
        vec![0x04, 0x00],
        vec![uid[0], uid[1], uid[2], uid[3], bcc],
        vec![0x08],
    ]
}
