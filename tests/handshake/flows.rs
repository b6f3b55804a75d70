//! Message ordering across complete handshake flows, seen from the client
//! and the server.

use tls_handshake_state::crypto::Prf;
use tls_handshake_state::message::{
    Certificate, CertificateRequest, ClientKeyExchange, Finished, NewSessionTicket, NextProtocol,
    ServerHelloDone, ServerKeyExchange,
};
use tls_handshake_state::{
    AlertDescription, CipherSuite, Error, HandshakeType, HashAlgorithm, ProtocolVersion,
    SignatureAlgorithm,
};

use crate::common::*;

type H = HandshakeType;

#[test]
fn full_handshake_client_side() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    state.set_client_hello(client_hello(
        ProtocolVersion::TLS1_2,
        &[ECDHE_RSA_AES128_GCM],
    ));

    step(&mut state, &[H::ServerHello], H::ServerHello).unwrap();
    let sh = server_hello(ProtocolVersion::TLS1_2, ECDHE_RSA_AES128_GCM);
    state.set_version(sh.server_version);
    state.set_ciphersuite(sh.ciphersuite().unwrap());
    state.set_server_hello(sh);

    step(&mut state, &[H::Certificate], H::Certificate).unwrap();
    state.set_server_certs(Certificate::new(vec![vec![0x30, 0x82]]));

    step(&mut state, &[H::ServerKeyExchange], H::ServerKeyExchange).unwrap();
    state.set_server_kex(ServerKeyExchange::new(vec![3, 0, 23], None, vec![]));

    step(
        &mut state,
        &[H::CertificateRequest, H::ServerHelloDone],
        H::ServerHelloDone,
    )
    .unwrap();
    state.set_server_hello_done(ServerHelloDone);

    // Client flight goes out; only CCS then Finished may come back.
    state.set_client_kex(ClientKeyExchange::new(vec![0x04; 65]));
    state.set_client_finished(Finished::new(vec![0xaa; 12]));

    step(&mut state, &[H::ChangeCipherSpec], H::ChangeCipherSpec).unwrap();
    step(&mut state, &[H::Finished], H::Finished).unwrap();
    state.set_server_finished(Finished::new(vec![0xbb; 12]));

    assert_eq!(
        state.received_mask(),
        mask(&[
            H::ServerHello,
            H::Certificate,
            H::ServerKeyExchange,
            H::ServerHelloDone,
            H::ChangeCipherSpec,
            H::Finished,
        ])
    );
    assert!(!state.received_handshake_msg(H::CertificateRequest));
    assert_eq!(state.expecting_mask(), 0);
    assert_eq!(
        state.protocol_specific_prf().unwrap(),
        Prf::Tls12(HashAlgorithm::SHA256)
    );
    assert_eq!(state.server_certs().unwrap().count(), 1);
}

#[test]
fn full_handshake_server_side_with_client_auth() {
    let mut state = new_state(ProtocolVersion::TLS1_2);

    step(&mut state, &[H::ClientHello], H::ClientHello).unwrap();
    state.set_client_hello(client_hello(
        ProtocolVersion::TLS1_2,
        &[ECDHE_ECDSA_AES256_GCM],
    ));
    state.set_ciphersuite(CipherSuite::from_u16(ECDHE_ECDSA_AES256_GCM).unwrap());
    state.set_cert_req(CertificateRequest::new(
        vec![SignatureAlgorithm::ECDSA],
        vec![],
        vec![],
    ));

    step(&mut state, &[H::Certificate], H::Certificate).unwrap();
    state.set_client_certs(Certificate::new(vec![vec![0x30]]));
    step(&mut state, &[H::ClientKeyExchange], H::ClientKeyExchange).unwrap();
    step(&mut state, &[H::CertificateVerify], H::CertificateVerify).unwrap();
    step(&mut state, &[H::ChangeCipherSpec], H::ChangeCipherSpec).unwrap();
    step(&mut state, &[H::Finished], H::Finished).unwrap();

    assert!(state.received_handshake_msg(H::CertificateVerify));
    assert!(state.cert_req().is_some());
    assert_eq!(
        state.protocol_specific_prf().unwrap(),
        Prf::Tls12(HashAlgorithm::SHA384)
    );
}

#[test]
fn sslv2_hello_accepted_as_client_hello() {
    let mut state = new_state(ProtocolVersion::TLS1_0);
    step(&mut state, &[H::ClientHello], H::ClientHelloSslV2).unwrap();
    assert!(state.received_handshake_msg(H::ClientHello));
}

#[test]
fn abbreviated_handshake_with_ticket() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    state.set_client_hello(
        client_hello(ProtocolVersion::TLS1_2, &[RSA_AES128_SHA]).with_session_ticket(vec![5; 32]),
    );

    step(&mut state, &[H::ServerHello], H::ServerHello).unwrap();
    let sh = server_hello(ProtocolVersion::TLS1_2, RSA_AES128_SHA).with_session_ticket_support();
    state.set_ciphersuite(sh.ciphersuite().unwrap());
    state.set_server_hello(sh);

    // Resumed: the server may skip straight to CCS, or issue a fresh ticket.
    step(
        &mut state,
        &[H::NewSessionTicket, H::ChangeCipherSpec],
        H::NewSessionTicket,
    )
    .unwrap();
    state.set_new_session_ticket(NewSessionTicket::new(7200, vec![9; 48]));

    step(&mut state, &[H::ChangeCipherSpec], H::ChangeCipherSpec).unwrap();
    step(&mut state, &[H::Finished], H::Finished).unwrap();

    assert!(!state.received_handshake_msg(H::Certificate));
    assert_eq!(state.session_ticket(), &[9; 48][..]);
    // SHA-1 MAC suites still use the SHA-256 PRF on TLS 1.2.
    assert_eq!(
        state.protocol_specific_prf().unwrap(),
        Prf::Tls12(HashAlgorithm::SHA256)
    );
}

#[test]
fn resumption_without_new_ticket_keeps_offered_one() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    state.set_client_hello(
        client_hello(ProtocolVersion::TLS1_2, &[RSA_AES128_SHA]).with_session_ticket(vec![5; 32]),
    );
    step(&mut state, &[H::ServerHello], H::ServerHello).unwrap();
    step(
        &mut state,
        &[H::NewSessionTicket, H::ChangeCipherSpec],
        H::ChangeCipherSpec,
    )
    .unwrap();

    assert_eq!(state.session_ticket(), &[5; 32][..]);
}

#[test]
fn next_protocol_before_finished() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    state.set_client_hello(client_hello(ProtocolVersion::TLS1_2, &[]).with_next_protocol());

    step(&mut state, &[H::ChangeCipherSpec], H::ChangeCipherSpec).unwrap();
    step(&mut state, &[H::NextProtocol], H::NextProtocol).unwrap();
    state.set_next_protocol(NextProtocol::new("http/1.1"));
    step(&mut state, &[H::Finished], H::Finished).unwrap();

    assert_eq!(state.next_protocol().unwrap().protocol, "http/1.1");
}

#[test]
fn dtls_hello_verify_then_server_hello() {
    let mut state = new_state(ProtocolVersion::DTLS1_2);
    assert!(state.version().is_datagram_protocol());

    step(
        &mut state,
        &[H::HelloVerifyRequest, H::ServerHello],
        H::HelloVerifyRequest,
    )
    .unwrap();

    // Client resends its hello with the cookie; the verify request may not repeat.
    step(&mut state, &[H::ServerHello], H::ServerHello).unwrap();
    state.set_ciphersuite(CipherSuite::from_u16(ECDHE_ECDSA_AES256_GCM).unwrap());

    assert_eq!(
        state.received_mask(),
        H::HelloVerifyRequest.bitmask() | H::ServerHello.bitmask()
    );
    assert_eq!(
        state.protocol_specific_prf().unwrap(),
        Prf::Tls12(HashAlgorithm::SHA384)
    );
}

#[test]
fn dtls10_uses_legacy_prf() {
    let mut state = new_state(ProtocolVersion::DTLS1_0);
    state.set_ciphersuite(CipherSuite::from_u16(ECDHE_RSA_AES128_GCM).unwrap());
    assert_eq!(state.protocol_specific_prf().unwrap(), Prf::Tls);
}

#[test]
fn out_of_order_message_is_rejected() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    state.set_expected_next(H::ServerHelloDone);

    let err = state.confirm_transition_to(H::Finished).unwrap_err();
    assert_eq!(err.alert(), AlertDescription::UnexpectedMessage);
    assert_eq!(
        err,
        Error::UnexpectedMessage {
            msg_type: H::Finished,
            expected: H::ServerHelloDone.bitmask(),
            received: H::Finished.bitmask(),
        }
    );

    // The rejected type is still recorded, the expectation is left in place.
    assert!(state.received_handshake_msg(H::Finished));
    assert_eq!(state.expecting_mask(), H::ServerHelloDone.bitmask());
    state.confirm_transition_to(H::ServerHelloDone).unwrap();
}

#[test]
fn repeated_message_needs_new_expectation() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    step(&mut state, &[H::Certificate], H::Certificate).unwrap();
    assert!(state.confirm_transition_to(H::Certificate).is_err());
}

#[test]
fn renegotiation_refused_by_not_expecting_hello_request() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    step(&mut state, &[H::Finished], H::Finished).unwrap();

    let err = state.confirm_transition_to(H::HelloRequest).unwrap_err();
    assert!(err.is_unexpected_message());
}

#[test]
fn none_type_is_never_accepted() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    state.set_expected_next(H::None);
    assert_eq!(state.expecting_mask(), 0);

    state.set_expected_next(H::Finished);
    assert!(state.confirm_transition_to(H::None).is_err());
    assert_eq!(state.received_mask(), 0);
}

#[test]
fn srp_flow_exposes_identifier() {
    let mut state = new_state(ProtocolVersion::TLS1_2);
    state.set_client_hello(
        client_hello(ProtocolVersion::TLS1_2, &[SRP_SHA_AES128_SHA]).with_srp_identifier("carol"),
    );
    assert_eq!(state.srp_identifier(), None);

    step(&mut state, &[H::ServerHello], H::ServerHello).unwrap();
    let sh = server_hello(ProtocolVersion::TLS1_2, SRP_SHA_AES128_SHA);
    state.set_ciphersuite(sh.ciphersuite().unwrap());

    assert_eq!(state.srp_identifier(), Some("carol"));
}

#[test]
fn ssl3_prf() {
    let state = new_state(ProtocolVersion::SSL3_0);
    assert_eq!(state.protocol_specific_prf().unwrap(), Prf::Ssl3);
}

#[test]
fn unknown_version_prf_fails() {
    let state = new_state(ProtocolVersion::Unknown(0x0304));
    let err = state.protocol_specific_prf().unwrap_err();
    assert_eq!(err.alert(), AlertDescription::InternalError);
}
