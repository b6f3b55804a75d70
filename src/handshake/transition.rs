use crate::types::HandshakeType;
use crate::Error;

/// Bitmask tracking of which handshake messages have arrived and which
/// may arrive next.
///
/// The flow itself (full, abbreviated, client auth...) is encoded by the
/// driver through the sequence of [`Transitions::expect()`] calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transitions {
    /// Every type ever submitted to `confirm()`. Only grows.
    received: u32,
    /// Types acceptable as the next message.
    expecting: u32,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `msg_type` was declared acceptable and consume the
    /// expectation.
    ///
    /// The type is recorded as received even when it is rejected.
    pub fn confirm(&mut self, msg_type: HandshakeType) -> Result<(), Error> {
        let mask = msg_type.bitmask();

        self.received |= mask;

        if self.expecting & mask == 0 {
            debug!(
                "Unexpected {:?}, expecting {:#06x} received {:#06x}",
                msg_type, self.expecting, self.received
            );
            return Err(Error::UnexpectedMessage {
                msg_type,
                expected: self.expecting,
                received: self.received,
            });
        }

        // Nothing is acceptable until the driver says what comes next.
        // A forgotten expect() fails the next confirm().
        self.expecting = 0;

        trace!("Accepted {:?}", msg_type);

        Ok(())
    }

    /// Add `msg_type` to the set acceptable as the next message.
    pub fn expect(&mut self, msg_type: HandshakeType) {
        self.expecting |= msg_type.bitmask();
        trace!("Expecting {:?} ({:#06x})", msg_type, self.expecting);
    }

    pub fn received(&self, msg_type: HandshakeType) -> bool {
        self.received & msg_type.bitmask() != 0
    }

    pub fn received_mask(&self) -> u32 {
        self.received
    }

    pub fn expecting_mask(&self) -> u32 {
        self.expecting
    }
}
