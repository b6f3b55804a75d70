#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextProtocol {
    pub protocol: String,
}

impl NextProtocol {
    pub fn new(protocol: impl Into<String>) -> Self {
        NextProtocol {
            protocol: protocol.into(),
        }
    }
}
