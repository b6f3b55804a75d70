use std::fmt;

/// TLS alert descriptions a driver sends when this core reports a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertDescription {
    UnexpectedMessage,
    DecodeError,
    InternalError,
}

impl AlertDescription {
    pub fn as_u8(&self) -> u8 {
        match self {
            AlertDescription::UnexpectedMessage => 10,
            AlertDescription::DecodeError => 50,
            AlertDescription::InternalError => 80,
        }
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertDescription::UnexpectedMessage => "unexpected_message",
            AlertDescription::DecodeError => "decode_error",
            AlertDescription::InternalError => "internal_error",
        };
        write!(f, "{}", name)
    }
}
