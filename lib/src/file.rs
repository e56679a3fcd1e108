use crate::Error;

/// JPEG start-of-image marker
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// A file attachment: a name (with extension, e.g. "test.txt") and its bytes.
///
/// Two files with the same name and content are equal and hash the same, so
/// duplicates collapse when collected into a `HashSet`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedFile {
    name: String,
    data: Vec<u8>,
}

impl NamedFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let name = name.into();
        let data = data.into();

        if name.is_empty() {
            return Err(Error::InvalidInput("file name is empty".to_string()));
        }

        if data.is_empty() {
            return Err(Error::InvalidInput(format!("file {} is empty", name)));
        }

        Ok(Self { name, data })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Checks the file extension and the SOI marker. Both must match.
    pub fn is_jpeg(&self) -> bool {
        let has_right_name = self.name.ends_with(".jpg") || self.name.ends_with(".jpeg");
        has_right_name && self.data.starts_with(&JPEG_SOI)
    }
}
