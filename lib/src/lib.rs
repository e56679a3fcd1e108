//! Client for the Mailjet Send API v3.1.
//!
//! Only plain-text emails are supported. JPEG attachments are sent as
//! separate inline attachments; every other file is compressed into a single
//! `attachments.zip`.

pub mod attachments;
pub mod config;
pub mod email;
pub mod error;
pub mod file;
pub mod mailjet;
pub mod transport;

pub use email::Message;
pub use error::Error;
pub use file::NamedFile;
pub use mailjet::Client;
pub use transport::{HttpTransport, SendRequest, Transport, TransportFuture};
