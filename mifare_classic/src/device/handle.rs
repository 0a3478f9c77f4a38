// mifare-classic-rs/mifare_classic/src/device/handle.rs

use std::marker::PhantomData;

use log::trace;

use crate::layout;
use crate::protocol::responses;
use crate::protocol::{Command, access_bits, value_block};
use crate::transport::Transceiver;
use crate::types::{
    BlockData, CardType, Key, KeyType, LoadModulation, PersonalizedUid, SectorPermission, Uid,
};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
/// Type-state markers
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
/// All card operations live on `Reader<Initialized>`.
pub struct Reader<State = Uninitialized> {
    transceiver: Box<dyn Transceiver>,
    card_type: Option<CardType>,
    _state: PhantomData<State>,
}

impl Reader<Uninitialized> {
    /// Create a Reader from an existing Transceiver instance. This is
    /// also how tests plug in a MockTransceiver.
    pub fn new(transceiver: Box<dyn Transceiver>) -> Self {
        Self {
            transceiver,
            card_type: None,
            _state: PhantomData,
        }
    }

    /// Bring the contactless front-end up. Returns an initialized Reader
    /// on success.
    pub fn initialize(self) -> Result<Reader<Initialized>> {
        let mut this = self;
        this.transceiver.init()?;

        Ok(Reader {
            transceiver: this.transceiver,
            card_type: None,
            _state: PhantomData,
        })
    }
}

impl Reader<Initialized> {
    /// Execute a command and return the raw response after checking its
    /// length against what the command expects.
    fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let tx = cmd.encode();
        trace!("tx {}", bytes_to_hex_spaced(&tx));
        let rx = self.transceiver.transceive(&tx, cmd.response_len())?;
        trace!("rx {}", bytes_to_hex_spaced(&rx));

        if rx.len() != cmd.response_len() {
            return Err(Error::InvalidLength {
                expected: cmd.response_len(),
                actual: rx.len(),
            });
        }
        Ok(rx)
    }

    /// Send a frame the card intentionally does not answer (halt, the
    /// value operand phase). Transport errors are ignored.
    fn execute_ignored(&mut self, cmd: &Command) {
        let tx = cmd.encode();
        trace!("tx {} (no response expected)", bytes_to_hex_spaced(&tx));
        let _ = self.transceiver.transceive(&tx, cmd.response_len());
    }

    /// REQA: probe for a card in IDLE state and detect its generation.
    /// The detected type is remembered on the handle.
    pub fn request(&mut self) -> Result<CardType> {
        let rx = self.execute(&Command::Request)?;
        match responses::decode_atqa(&rx) {
            Ok(card_type) => {
                self.card_type = Some(card_type);
                Ok(card_type)
            }
            Err(e) => {
                self.card_type = None;
                Err(e)
            }
        }
    }

    /// WUPA: like [`request`](Self::request), but also reaches cards in
    /// HALT state.
    pub fn wake_up(&mut self) -> Result<CardType> {
        let rx = self.execute(&Command::WakeUp)?;
        match responses::decode_atqa(&rx) {
            Ok(card_type) => {
                self.card_type = Some(card_type);
                Ok(card_type)
            }
            Err(e) => {
                self.card_type = None;
                Err(e)
            }
        }
    }

    /// HLTA: put the selected card into HALT state. A halted card answers
    /// nothing, so the exchange result is discarded.
    pub fn halt(&mut self) {
        self.execute_ignored(&Command::Halt);
    }

    /// EV1: select the load modulation strength.
    pub fn set_modulation(&mut self, mode: LoadModulation) -> Result<()> {
        let rx = self.execute(&Command::SetModulation(mode))?;
        responses::decode_ack(&rx)
    }

    /// EV1: select the personalized UID usage.
    pub fn set_personalized_uid(&mut self, usage: PersonalizedUid) -> Result<()> {
        let rx = self.execute(&Command::PersonalizeUid(usage))?;
        responses::decode_ack(&rx)
    }

    /// Cascade level 1 anticollision: fetch the UID (with BCC check).
    pub fn anticollision_cl1(&mut self) -> Result<Uid> {
        let rx = self.execute(&Command::AnticollisionCl1)?;
        responses::decode_uid(&rx)
    }

    /// Cascade level 2 anticollision, for double-size UID cards.
    pub fn anticollision_cl2(&mut self) -> Result<Uid> {
        let rx = self.execute(&Command::AnticollisionCl2)?;
        responses::decode_uid(&rx)
    }

    /// Cascade level 1 select. The SAK must identify a MIFARE Classic.
    pub fn select_cl1(&mut self, uid: Uid) -> Result<()> {
        let rx = self.execute(&Command::SelectCl1 { uid })?;
        responses::decode_sak(&rx)?;
        Ok(())
    }

    /// Cascade level 2 select.
    pub fn select_cl2(&mut self, uid: Uid) -> Result<()> {
        let rx = self.execute(&Command::SelectCl2 { uid })?;
        responses::decode_sak(&rx)?;
        Ok(())
    }

    /// Crypto1-authenticate a sector through one of its blocks. The
    /// front-end runs the handshake; a card that rejects the key simply
    /// stops answering, so any exchange failure maps to
    /// [`Error::AuthenticationFailed`].
    pub fn authenticate(
        &mut self,
        uid: Uid,
        block: u8,
        key_type: KeyType,
        key: &Key,
    ) -> Result<()> {
        let cmd = Command::Authenticate {
            block,
            key_type,
            key: *key,
            uid,
        };
        let tx = cmd.encode();
        trace!("tx auth block {} with {}", block, key_type);
        self.transceiver
            .transceive(&tx, cmd.response_len())
            .map_err(|_| Error::AuthenticationFailed)?;
        Ok(())
    }

    /// Read one 16-byte block (CRC-checked).
    pub fn read(&mut self, block: u8) -> Result<BlockData> {
        let rx = self.execute(&Command::Read { block })?;
        responses::decode_read_block(&rx)
    }

    /// Write one 16-byte block. The card ACKs the address frame first,
    /// then ACKs the data phase.
    pub fn write(&mut self, block: u8, data: &BlockData) -> Result<()> {
        let rx = self.execute(&Command::WriteBegin { block })?;
        responses::decode_ack(&rx)?;

        let rx = self.execute(&Command::WriteData { data: *data })?;
        responses::decode_ack(&rx)
    }

    /// Format a block as a value block holding `value` with backup
    /// address `addr`.
    pub fn value_init(&mut self, block: u8, value: i32, addr: u8) -> Result<()> {
        self.value_write(block, value, addr)
    }

    /// Overwrite a value block with a new value and backup address. Same
    /// wire exchange as [`value_init`](Self::value_init); the split mirrors
    /// the distinction between first-time formatting and later updates.
    pub fn value_write(&mut self, block: u8, value: i32, addr: u8) -> Result<()> {
        let data = BlockData::from_bytes(value_block::encode(value, addr));
        self.write(block, &data)
    }

    /// Read a block and decode it as a value block, validating all
    /// redundant copies.
    pub fn value_read(&mut self, block: u8) -> Result<(i32, u8)> {
        let data = self.read(block)?;
        value_block::decode(data.as_bytes())
    }

    /// Add `value` to a value block inside the card's internal register.
    /// Follow with [`transfer`](Self::transfer) to make the result
    /// durable. The operand phase is intentionally unanswered by the card.
    pub fn increment(&mut self, block: u8, value: u32) -> Result<()> {
        let rx = self.execute(&Command::IncrementBegin { block })?;
        responses::decode_value_ack(&rx)?;

        self.execute_ignored(&Command::ValueOperand { value });
        Ok(())
    }

    /// Subtract `value` from a value block inside the internal register.
    pub fn decrement(&mut self, block: u8, value: u32) -> Result<()> {
        let rx = self.execute(&Command::DecrementBegin { block })?;
        responses::decode_value_ack(&rx)?;

        self.execute_ignored(&Command::ValueOperand { value });
        Ok(())
    }

    /// Copy a value block into the internal register.
    pub fn restore(&mut self, block: u8) -> Result<()> {
        let rx = self.execute(&Command::RestoreBegin { block })?;
        responses::decode_value_ack(&rx)?;

        // The restore data phase carries a dummy zero operand.
        self.execute_ignored(&Command::ValueOperand { value: 0 });
        Ok(())
    }

    /// Write the internal register back into a block.
    pub fn transfer(&mut self, block: u8) -> Result<()> {
        let rx = self.execute(&Command::Transfer { block })?;
        responses::decode_value_ack(&rx)
    }

    /// Rewrite a sector trailer: key A, the packed access conditions and
    /// user byte, key B. The caller must already be authenticated for the
    /// trailer with a key allowed to write it.
    pub fn set_sector_permission(
        &mut self,
        sector: u8,
        key_a: &Key,
        perm: &SectorPermission,
        key_b: &Key,
    ) -> Result<()> {
        let block = layout::sector_last_block(sector);
        let data = BlockData::from_bytes(access_bits::encode_trailer(key_a, perm, key_b));
        self.write(block, &data)
    }

    /// Read back a sector trailer and decode its access conditions and
    /// key B. Key A is not readable on-card.
    pub fn get_sector_permission(&mut self, sector: u8) -> Result<(SectorPermission, Key)> {
        let block = layout::sector_last_block(sector);
        let data = self.read(block)?;
        access_bits::decode_trailer(data.as_bytes())
    }

    /// Raw passthrough to the front-end for vendor frames the driver does
    /// not model.
    pub fn transceive(&mut self, tx: &[u8], rx_expect: usize) -> Result<Vec<u8>> {
        self.transceiver.transceive(tx, rx_expect)
    }

    /// Sleep via the front-end's timer.
    pub fn delay_ms(&mut self, ms: u32) {
        self.transceiver.delay_ms(ms);
    }

    /// The generation detected by the last successful request/wake-up.
    pub fn card_type(&self) -> Option<CardType> {
        self.card_type
    }

    /// Shut the front-end down, consuming the handle.
    pub fn close(mut self) -> Result<()> {
        self.transceiver.close()
    }
}
