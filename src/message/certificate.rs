/// Certificate chain, leaf first, each entry DER encoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Certificate {
    pub cert_chain: Vec<Vec<u8>>,
}

impl Certificate {
    pub fn new(cert_chain: Vec<Vec<u8>>) -> Self {
        Certificate { cert_chain }
    }

    pub fn is_empty(&self) -> bool {
        self.cert_chain.is_empty()
    }

    pub fn count(&self) -> usize {
        self.cert_chain.len()
    }

    pub fn leaf(&self) -> Option<&[u8]> {
        self.cert_chain.first().map(|c| c.as_slice())
    }
}
