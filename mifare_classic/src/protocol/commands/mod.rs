// mifare-classic-rs/mifare_classic/src/protocol/commands/mod.rs

pub mod auth;
pub mod block;
pub mod control;
pub mod select;
pub mod value;

pub use auth::encode_authenticate;
pub use block::{encode_read, encode_write_begin, encode_write_data};
pub use control::{encode_halt, encode_personalize_uid, encode_set_modulation};
pub use select::{
    encode_anticollision_cl1, encode_anticollision_cl2, encode_request, encode_select_cl1,
    encode_select_cl2, encode_wake_up,
};
pub use value::{
    encode_decrement_begin, encode_increment_begin, encode_restore_begin, encode_transfer,
    encode_value_operand,
};

use crate::types::{BlockData, Key, KeyType, LoadModulation, PersonalizedUid, Uid};

/// High-level command enum, one variant per radio frame the driver emits.
/// New frames should be added here with their encoder placed in
/// `protocol::commands::<topic>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// REQA: probe for cards in IDLE state.
    Request,
    /// WUPA: probe for cards in IDLE or HALT state.
    WakeUp,
    /// HLTA: halt the selected card. The card answers nothing on success.
    Halt,
    /// EV1 load modulation control.
    SetModulation(LoadModulation),
    /// EV1 personalized UID usage control.
    PersonalizeUid(PersonalizedUid),
    /// Cascade level 1 anticollision, full frame.
    AnticollisionCl1,
    /// Cascade level 2 anticollision, full frame.
    AnticollisionCl2,
    /// Cascade level 1 select.
    SelectCl1 {
        /// UID transmitted with its BCC.
        uid: Uid,
    },
    /// Cascade level 2 select.
    SelectCl2 {
        /// UID transmitted with its BCC.
        uid: Uid,
    },
    /// Crypto1 authentication request; the front-end completes the
    /// handshake internally, so no response bytes are expected.
    Authenticate {
        /// Block addressed by the authentication.
        block: u8,
        /// Which sector key to use.
        key_type: KeyType,
        /// The 6-byte key.
        key: Key,
        /// UID of the selected card.
        uid: Uid,
    },
    /// Read one 16-byte block.
    Read {
        /// Block number.
        block: u8,
    },
    /// First step of a block write; the card ACKs before the data phase.
    WriteBegin {
        /// Block number.
        block: u8,
    },
    /// Second step of a block write: 16 data bytes plus CRC.
    WriteData {
        /// Data to store.
        data: BlockData,
    },
    /// First step of an increment; expects ACK.
    IncrementBegin {
        /// Value block number.
        block: u8,
    },
    /// First step of a decrement; expects ACK.
    DecrementBegin {
        /// Value block number.
        block: u8,
    },
    /// First step of a restore; expects ACK.
    RestoreBegin {
        /// Value block number.
        block: u8,
    },
    /// Transfer the internal register into a block; expects ACK.
    Transfer {
        /// Destination block number.
        block: u8,
    },
    /// Second step of increment/decrement/restore: the 4-byte operand.
    /// The card intentionally does not answer this frame.
    ValueOperand {
        /// Little-endian operand (zero for restore).
        value: u32,
    },
}

impl Command {
    /// Encode the command into the raw frame handed to the transceiver.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Request => encode_request(),
            Self::WakeUp => encode_wake_up(),
            Self::Halt => encode_halt(),
            Self::SetModulation(mode) => encode_set_modulation(*mode),
            Self::PersonalizeUid(usage) => encode_personalize_uid(*usage),
            Self::AnticollisionCl1 => encode_anticollision_cl1(),
            Self::AnticollisionCl2 => encode_anticollision_cl2(),
            Self::SelectCl1 { uid } => encode_select_cl1(*uid),
            Self::SelectCl2 { uid } => encode_select_cl2(*uid),
            Self::Authenticate {
                block,
                key_type,
                key,
                uid,
            } => encode_authenticate(*block, *key_type, *key, *uid),
            Self::Read { block } => encode_read(*block),
            Self::WriteBegin { block } => encode_write_begin(*block),
            Self::WriteData { data } => encode_write_data(*data),
            Self::IncrementBegin { block } => encode_increment_begin(*block),
            Self::DecrementBegin { block } => encode_decrement_begin(*block),
            Self::RestoreBegin { block } => encode_restore_begin(*block),
            Self::Transfer { block } => encode_transfer(*block),
            Self::ValueOperand { value } => encode_value_operand(*value),
        }
    }

    /// Response length the card answers with on success.
    pub fn response_len(&self) -> usize {
        match self {
            Self::Request | Self::WakeUp => 2,
            Self::Halt => 0,
            Self::SetModulation(_) | Self::PersonalizeUid(_) => 1,
            Self::AnticollisionCl1 | Self::AnticollisionCl2 => 5,
            Self::SelectCl1 { .. } | Self::SelectCl2 { .. } => 1,
            Self::Authenticate { .. } => 0,
            Self::Read { .. } => crate::constants::READ_RESPONSE_LEN,
            Self::WriteBegin { .. } | Self::WriteData { .. } => 1,
            Self::IncrementBegin { .. }
            | Self::DecrementBegin { .. }
            | Self::RestoreBegin { .. }
            | Self::Transfer { .. } => 1,
            Self::ValueOperand { .. } => 0,
        }
    }
}
