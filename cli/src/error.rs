#[derive(Debug)]
pub enum Error {
    Mailjet(mailjet::Error),
    Attachment(String, std::io::Error),
    Stdin(std::io::Error),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Mailjet(ref err) => write!(f, "{}", err),
            Error::Attachment(ref path, ref err) => {
                write!(f, "Failed to read attachment {}: {}", path, err)
            }
            Error::Stdin(ref err) => write!(f, "Failed to read message body from stdin: {}", err),
        }
    }
}

impl From<mailjet::Error> for Error {
    fn from(err: mailjet::Error) -> Self {
        Self::Mailjet(err)
    }
}
