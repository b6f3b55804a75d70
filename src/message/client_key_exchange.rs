#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKeyExchange {
    /// Encrypted premaster secret or the client's public value.
    pub exchange_keys: Vec<u8>,
}

impl ClientKeyExchange {
    pub fn new(exchange_keys: Vec<u8>) -> Self {
        ClientKeyExchange { exchange_keys }
    }
}
