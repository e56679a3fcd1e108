use serde::Serialize;
use serde_json::{Map, Value};

use crate::Error;

pub const MAILJET_SEND_URL: &str = "https://api.mailjet.com/v3.1/send";

// Request timeout, in seconds
pub(crate) const MAILJET_REQUEST_TIMEOUT: u64 = 30;

pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";
pub const ZIP_CONTENT_TYPE: &str = "application/zip";
pub const ARCHIVE_NAME: &str = "attachments.zip";

const STATUS_SUCCESS: &str = "success";

/// Body of a Send API v3.1 request
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SendPayload {
    pub messages: Vec<MessagePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_mode: Option<bool>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct MessagePayload {
    pub from: Address,
    pub to: Vec<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Address>,
    pub subject: String,
    pub text_part: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    pub content_type: String,
    pub filename: String,
    pub base64_content: String,
}

/// Maps a raw Send API response body to the outcome of the send.
///
/// Only the first entry of `Messages` is inspected, since every request
/// carries exactly one message.
pub fn interpret_response(body: Option<&[u8]>) -> Result<(), Error> {
    let body = match body {
        Some(b) if !b.is_empty() => b,
        _ => return Err(Error::ResponseParse("empty response body".to_string())),
    };

    let result: Map<String, Value> = serde_json::from_slice(body)?;

    let first = result
        .get("Messages")
        .and_then(Value::as_array)
        .filter(|messages| messages.iter().all(Value::is_object))
        .and_then(|messages| messages.first());

    let message = match first {
        Some(m) => m,
        None => {
            let msg = match result.get("ErrorMessage") {
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
                None => "Unknown".to_string(),
            };
            return Err(Error::ResponseShape(msg));
        }
    };

    match message.get("Status").and_then(Value::as_str) {
        Some(STATUS_SUCCESS) => Ok(()),
        status => Err(Error::SendRejected {
            status: status.unwrap_or("unknown").to_string(),
            message: first_error_message(message),
        }),
    }
}

/// Per-message errors come back as `"Errors": [{"ErrorMessage": ...}]`
fn first_error_message(message: &Value) -> Option<String> {
    message
        .get("Errors")?
        .as_array()?
        .iter()
        .find_map(|e| e.get("ErrorMessage").and_then(Value::as_str))
        .map(String::from)
}
