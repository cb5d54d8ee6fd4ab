use std::fmt::Display;

use crate::api;
use crate::widgets::TextInputState;

pub const CONFIG_ERROR: &str =
    "Error: API URL is not configured. Please contact the administrator.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// Feedback shown under the form once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failure,
            text: text.into(),
        }
    }

    /// For failures that carry no description of their own, e.g. a task that
    /// panicked or was cancelled.
    pub fn unexpected(err: impl Display) -> Self {
        Self::failure(format!("An unexpected error occurred: {err}"))
    }

    pub fn is_failure(&self) -> bool {
        self.kind == StatusKind::Failure
    }
}

/// A request that has been started but not sent yet.
///
/// Owns everything it needs so it can be moved onto another task.
#[derive(Debug, Clone)]
pub struct Submission {
    client: reqwest::Client,
    endpoint: String,
    query: String,
}

impl Submission {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub async fn send(self) -> Status {
        match api::submit_scrape(&self.client, &self.endpoint, &self.query).await {
            Ok(message) => Status::success(message),
            Err(err) => {
                tracing::warn!(error = %err, "scrape request failed");
                Status::failure(format!("Error: {err}"))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub query: TextInputState,
    pub loading: bool,
    pub message: Option<Status>,
}

impl SearchForm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: TextInputState::new(query),
            loading: false,
            message: None,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.query.input.is_empty()
    }

    /// Starts a submission of the current query.
    ///
    /// Returns `None` when nothing should be sent: the query is empty, a
    /// submission is already in flight, or no endpoint is configured. Only the
    /// last case touches the form state.
    pub fn begin_submit(
        &mut self,
        endpoint: Option<&str>,
        client: &reqwest::Client,
    ) -> Option<Submission> {
        if !self.can_submit() {
            tracing::debug!(loading = self.loading, "submit ignored");
            return None;
        }

        self.loading = true;
        self.message = None;

        let Some(endpoint) = endpoint.filter(|endpoint| !endpoint.trim().is_empty()) else {
            tracing::warn!("no backend address configured");
            self.settle(Status::failure(CONFIG_ERROR));
            return None;
        };

        Some(Submission {
            client: client.clone(),
            endpoint: endpoint.trim().to_string(),
            query: self.query.input.clone(),
        })
    }

    /// Records the outcome of a submission and leaves the loading state.
    pub fn settle(&mut self, status: Status) {
        tracing::info!(kind = ?status.kind, text = %status.text, "submission settled");
        self.loading = false;
        self.message = Some(status);
    }

    pub async fn submit(&mut self, endpoint: Option<&str>, client: &reqwest::Client) {
        if let Some(submission) = self.begin_submit(endpoint, client) {
            let status = submission.send().await;
            self.settle(status);
        }
    }

    /// The message to display, if any. Empty messages are never shown.
    pub fn visible_message(&self) -> Option<&Status> {
        self.message.as_ref().filter(|status| !status.text.is_empty())
    }
}
