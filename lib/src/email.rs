use std::collections::HashSet;

use crate::file::NamedFile;

/// A single outgoing plain-text email.
///
/// Built fresh for every send; attachments are a set, so duplicate files are
/// sent once.
#[derive(Clone, Debug, Default)]
pub struct Message {
    pub from: String,
    pub from_name: Option<String>,
    pub to: String,
    pub to_name: Option<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub sandbox: bool,
    pub attachments: HashSet<NamedFile>,
}

impl Message {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    pub fn with_to_name(mut self, name: impl Into<String>) -> Self {
        self.to_name = Some(name.into());
        self
    }

    pub fn with_reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    pub fn with_attachment(mut self, file: NamedFile) -> Self {
        self.attachments.insert(file);
        self
    }

    pub fn with_attachments(mut self, files: impl IntoIterator<Item = NamedFile>) -> Self {
        self.attachments.extend(files);
        self
    }

    /// Sandbox messages are validated by Mailjet but never delivered.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// True if there is nothing at all to send.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.subject.is_empty() && self.attachments.is_empty()
    }
}
