//! The HTTP boundary. Everything above this module only sees a 2xx body as text or an error.

use crate::error::BoxError;

use async_trait::async_trait;

/// Query string as ordered key/value pairs. Keys may repeat.
pub type Query = [(String, String)];

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a single GET to `url` with `query` appended and returns the body as received.
    /// Any non-2xx status must be reported as an error. Decoding the body is up to the caller.
    async fn fetch(&self, url: &str, query: &Query) -> Result<String, BoxError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn fetch(&self, url: &str, query: &Query) -> Result<String, BoxError> {
        let body = self
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
