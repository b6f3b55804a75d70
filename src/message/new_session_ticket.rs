#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSessionTicket {
    pub lifetime_hint: u32,
    /// An empty ticket means the server will not issue one.
    pub ticket: Vec<u8>,
}

impl NewSessionTicket {
    pub fn new(lifetime_hint: u32, ticket: Vec<u8>) -> Self {
        NewSessionTicket {
            lifetime_hint,
            ticket,
        }
    }

    pub fn ticket(&self) -> &[u8] {
        &self.ticket
    }
}
