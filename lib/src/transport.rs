use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::mailjet::api;
use crate::Error;

// Definition of future types for async use
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<Bytes, Error>> + Send + 'a>>;

/// A fully built Send API request, ready to go on the wire.
#[derive(Clone, Debug)]
pub struct SendRequest {
    pub url: reqwest::Url,
    /// Value of the `Authorization` header
    pub authorization: String,
    /// JSON-encoded payload
    pub body: Vec<u8>,
}

/// Delivers a JSON POST and hands back the raw response body.
///
/// Implementations must not retry; the sender makes at most one attempt.
pub trait Transport: Send + Sync {
    fn post_json(&self, request: SendRequest) -> TransportFuture<'_>;
}

/// Default transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(Duration::from_secs(api::MAILJET_REQUEST_TIMEOUT))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::RequestConstruction(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, request: SendRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let req = self
                .client
                .post(request.url)
                .header(CONTENT_TYPE, "application/json")
                .header(AUTHORIZATION, request.authorization)
                .body(request.body);

            // Mailjet reports errors in the body of 4xx responses as well
            let resp = req.send().await?;
            log::debug!("Mailjet responded with {}", resp.status());

            Ok(resp.bytes().await?)
        })
    }
}
