use std::error;
use std::fmt;

/// All possible Mailjet client errors.
///
/// Each variant carries a message for logging and for display to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Body, subject and attachments were all empty; nothing was sent.
    EmptyMessage,
    /// Payload, endpoint URL or credentials could not be encoded.
    RequestConstruction(String),
    /// The transport returned no body, or the body was not a JSON object.
    ResponseParse(String),
    /// The response JSON did not contain a usable `Messages` array.
    /// Carries the provider's `ErrorMessage`, if any.
    ResponseShape(String),
    /// The provider did not accept the message.
    SendRejected {
        status: String,
        message: Option<String>,
    },
    InvalidInput(String),
    Archive(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EmptyMessage => f.write_str("Can't send an empty message"),
            Error::RequestConstruction(ref msg) => write!(f, "Error creating request: {}", msg),
            Error::ResponseParse(ref msg) => write!(f, "Error parsing response: {}", msg),
            Error::ResponseShape(ref msg) => {
                write!(f, "Error parsing Messages response. Error: {}", msg)
            }
            Error::SendRejected {
                ref status,
                message: Some(ref msg),
            } => write!(f, "Failed to send the message ({}): {}", status, msg),
            Error::SendRejected { ref status, .. } => {
                write!(f, "Failed to send the message ({})", status)
            }
            Error::InvalidInput(ref msg) => write!(f, "Invalid input: {}", msg),
            Error::Archive(ref msg) => write!(f, "Archive: {}", msg),
            Error::Config(ref msg) => write!(f, "Config: {}", msg),
        }
    }
}

impl error::Error for Error {}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::RequestConstruction(err.to_string())
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(err: serde_json::error::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            Self::ResponseParse(err.to_string())
        } else {
            Self::RequestConstruction(err.to_string())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::RequestConstruction(err.to_string())
        } else {
            // No usable body came back from the provider
            Self::ResponseParse(err.to_string())
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Archive(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
