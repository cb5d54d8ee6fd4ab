use serde::{Deserialize, Serialize};

pub const UNKNOWN_BACKEND_ERROR: &str = "An unknown error occurred from the backend.";

#[derive(Debug, Serialize)]
pub struct ScrapeRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ScrapeReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The backend answered with a non-2xx status.
    #[error("{0}")]
    Backend(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

pub fn scrape_url(endpoint: &str) -> String {
    format!("{}/scrape", endpoint.strip_suffix('/').unwrap_or(endpoint))
}

/// Posts `query` to `<endpoint>/scrape` and returns the backend's message.
///
/// A 2xx reply without a `message` yields an empty string.
pub async fn submit_scrape(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
) -> Result<String, ScrapeError> {
    let url = scrape_url(endpoint);
    tracing::info!(%url, query, "submitting scrape request");

    let response = client
        .post(&url)
        .json(&ScrapeRequest { query })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    let reply: ScrapeReply = serde_json::from_str(&body)?;

    tracing::debug!(%status, ?reply, "scrape reply");

    if !status.is_success() {
        let detail = reply
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string());
        return Err(ScrapeError::Backend(detail));
    }

    Ok(reply.message.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::MockBackend;
    use test_case::test_case;

    #[test_case("http://localhost:3001", "http://localhost:3001/scrape" ; "bare")]
    #[test_case("http://localhost:3001/", "http://localhost:3001/scrape" ; "trailing slash")]
    #[test_case("https://api.example.com/v1", "https://api.example.com/v1/scrape" ; "with path")]
    fn scrape_url_joins(endpoint: &str, expected: &str) {
        assert_eq!(scrape_url(endpoint), expected);
    }

    #[test]
    fn reply_message_is_optional() {
        let reply: ScrapeReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply, ScrapeReply { message: None });

        let reply: ScrapeReply =
            serde_json::from_str(r#"{"message":"Saved 12 rows","rows":12}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Saved 12 rows"));
    }

    #[tokio::test]
    async fn posts_json_query() {
        let backend = MockBackend::spawn(200, r#"{"message":"Saved 12 rows"}"#).await;
        let client = MockBackend::client();

        let message = submit_scrape(&client, &backend.url(), "cafes in Chennai")
            .await
            .unwrap();

        assert_eq!(message, "Saved 12 rows");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/scrape");
        assert_eq!(
            requests[0].content_type.as_deref(),
            Some("application/json")
        );

        assert_eq!(requests[0].body, serde_json::json!({ "query": "cafes in Chennai" }));
    }

    #[tokio::test]
    async fn backend_error_uses_message() {
        let backend = MockBackend::spawn(500, r#"{"message":"Quota exceeded"}"#).await;

        let err = submit_scrape(&MockBackend::client(), &backend.url(), "q")
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Backend(_)));
        assert_eq!(err.to_string(), "Quota exceeded");
    }

    #[test_case("{}" ; "missing")]
    #[test_case(r#"{"message":""}"# ; "empty")]
    #[test_case(r#"{"message":null}"# ; "null")]
    #[tokio::test]
    async fn backend_error_without_message(body: &'static str) {
        let backend = MockBackend::spawn(502, body).await;

        let err = submit_scrape(&MockBackend::client(), &backend.url(), "q")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), UNKNOWN_BACKEND_ERROR);
    }

    #[tokio::test]
    async fn success_without_message_is_empty() {
        let backend = MockBackend::spawn(200, "{}").await;

        let message = submit_scrape(&MockBackend::client(), &backend.url(), "q")
            .await
            .unwrap();

        assert_eq!(message, "");
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let backend = MockBackend::spawn(200, "<html>oops</html>").await;

        let err = submit_scrape(&MockBackend::client(), &backend.url(), "q")
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let url = MockBackend::unreachable_url().await;

        let err = submit_scrape(&MockBackend::client(), &url, "q")
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Transport(_)));
    }
}
