//! Splits message attachments into inline JPEG images and a single zip
//! archive holding everything else.
use std::collections::HashSet;
use std::io::{Cursor, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::file::NamedFile;
use crate::mailjet::api::{self, Attachment};
use crate::Error;

/// Attachments split into two disjoint groups.
#[derive(Debug)]
pub struct Partition<'a> {
    pub images: Vec<&'a NamedFile>,
    pub others: Vec<&'a NamedFile>,
}

/// Every file lands in exactly one group. `others` is the set difference
/// of the input and `images`; files are not classified twice.
pub fn partition(files: &HashSet<NamedFile>) -> Partition<'_> {
    let image_set: HashSet<&NamedFile> = files.iter().filter(|f| f.is_jpeg()).collect();

    let mut images: Vec<&NamedFile> = image_set.iter().copied().collect();
    let mut others: Vec<&NamedFile> = files.iter().filter(|f| !image_set.contains(f)).collect();

    // HashSet order is random; keep payloads stable
    images.sort();
    others.sort();

    Partition { images, others }
}

/// Returns `name` if unused, otherwise the first free `stem (n).ext`.
fn unique_name(name: &str, used: &mut HashSet<String>) -> String {
    let (stem, ext) = match name.rfind('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    };

    let mut candidate = name.to_string();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = format!("{} ({}){}", stem, n, ext);
        n += 1;
    }

    used.insert(candidate.clone());
    candidate
}

/// Builds an in-memory zip archive with one entry per file.
///
/// Distinct files sharing a name get numbered entry names
/// (`notes.txt`, `notes (1).txt`) since zip entries must be unique.
pub fn archive(files: &[&NamedFile]) -> Result<Vec<u8>, Error> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut used = HashSet::new();

    for file in files {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(file.size() as u64 > u32::MAX as u64);

        writer.start_file(unique_name(file.name(), &mut used), options)?;
        writer.write_all(file.data())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Produces the `Attachments` list for a message: one `image/jpeg` entry per
/// image, followed by a single `attachments.zip` entry for all other files.
///
/// Returns `None` if there is nothing to attach. If the archive cannot be
/// built, it is left out and the images are still returned.
pub fn build(files: &HashSet<NamedFile>) -> Option<Vec<Attachment>> {
    build_with(files, archive)
}

fn build_with<F>(files: &HashSet<NamedFile>, archiver: F) -> Option<Vec<Attachment>>
where
    F: Fn(&[&NamedFile]) -> Result<Vec<u8>, Error>,
{
    if files.is_empty() {
        return None;
    }

    let Partition { images, others } = partition(files);

    let mut result: Vec<Attachment> = images
        .into_iter()
        .map(|f| Attachment {
            content_type: api::JPEG_CONTENT_TYPE.to_string(),
            filename: f.name().to_string(),
            base64_content: STANDARD.encode(f.data()),
        })
        .collect();

    if !others.is_empty() {
        match archiver(&others) {
            Ok(data) => result.push(Attachment {
                content_type: api::ZIP_CONTENT_TYPE.to_string(),
                filename: api::ARCHIVE_NAME.to_string(),
                base64_content: STANDARD.encode(data),
            }),
            Err(e) => {
                log::warn!(
                    "Dropping {} attachment(s), archive failed: {}",
                    others.len(),
                    e
                );
            }
        }
    }

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}
