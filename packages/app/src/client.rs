//! HTTP client for the word lookup service.

use std::time::Duration;

use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::StatusCode;
use thiserror::Error;

use alphabet_core::{Letter, WordRecord};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Lookup failures, with "no record for this letter" kept distinct from
/// transport and decode problems so the scenes can phrase their messages.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no word stored for this letter")]
    NotFound,
    #[error("lookup service answered HTTP {0}")]
    HttpStatus(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct WordClient {
    base_url: String,
    client: reqwest::Client,
}

impl WordClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: normalize_base_url(base_url.into()),
            client,
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Fetches the word record for a letter. Every call goes to the network
    /// with no-cache semantics; repeated displays of the same letter may
    /// issue duplicate requests and that is accepted.
    pub async fn get_word(&self, letter: Letter) -> Result<WordRecord, LookupError> {
        let url = format!("{}/words/{letter}", self.base_url);
        tracing::debug!(%letter, %url, "fetching word");

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::HttpStatus(status));
        }

        let body = response.text().await?;
        let record: WordRecord = serde_json::from_str(&body)?;
        tracing::debug!(word = %record.word, "received word record");
        Ok(record)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = WordClient::new("http://localhost:8080/api///");
        assert_eq!(client.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn decode_failure_is_distinct_from_not_found() {
        let err: LookupError = serde_json::from_str::<WordRecord>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, LookupError::Decode(_)));
        assert!(!matches!(err, LookupError::NotFound));
    }
}
