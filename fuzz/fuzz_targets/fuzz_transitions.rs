#![no_main]

//! Fuzz target for the handshake transition validator.
//!
//! Each input byte pair is an operation: the first byte picks expect or
//! confirm, the second is a handshake type code. Unknown codes are skipped.
//! A shadow model of both masks is checked after every step.

use libfuzzer_sys::fuzz_target;

use tls_handshake_state::{HandshakeState, HandshakeType, ProtocolVersion};

fuzz_target!(|data: &[u8]| {
    let mut state = HandshakeState::with_version(ProtocolVersion::TLS1_2);
    let mut expecting = 0u32;
    let mut received = 0u32;

    for op in data.chunks_exact(2) {
        let Ok(msg_type) = HandshakeType::try_from(op[1]) else {
            continue;
        };
        let bit = msg_type.bitmask();

        if op[0] & 1 == 0 {
            state.set_expected_next(msg_type);
            expecting |= bit;
        } else {
            let accepted = state.confirm_transition_to(msg_type).is_ok();
            received |= bit;

            assert_eq!(accepted, expecting & bit != 0);
            if accepted {
                expecting = 0;
            }
        }

        assert_eq!(state.expecting_mask(), expecting);
        assert_eq!(state.received_mask(), received);
        assert!(received & !0xffff == 0);
    }
});
