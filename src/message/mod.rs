//! Handshake messages as held by the handshake state.
//!
//! These are decoded value objects. Wire encoding lives with the record
//! layer; the handshake core only reads the few fields it needs.

mod certificate;
mod certificate_request;
mod certificate_verify;
mod client_hello;
mod client_key_exchange;
mod finished;
mod new_session_ticket;
mod next_protocol;
mod server_hello;
mod server_hello_done;
mod server_key_exchange;

pub use certificate::Certificate;
pub use certificate_request::CertificateRequest;
pub use certificate_verify::CertificateVerify;
pub use client_hello::ClientHello;
pub use client_key_exchange::ClientKeyExchange;
pub use finished::Finished;
pub use new_session_ticket::NewSessionTicket;
pub use next_protocol::NextProtocol;
pub use server_hello::ServerHello;
pub use server_hello_done::ServerHelloDone;
pub use server_key_exchange::ServerKeyExchange;
