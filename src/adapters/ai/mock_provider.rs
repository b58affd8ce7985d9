//! Mock Feedback Provider for testing.
//!
//! Provides a configurable mock implementation of the FeedbackProvider
//! port, allowing tests to run without calling the real Gemini API.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockFeedbackProvider::new()
//!     .with_feedback("Choose option A.");
//!
//! let feedback = provider.generate(request).await?;
//! assert_eq!(feedback.feedback, "Choose option A.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{Feedback, FeedbackError, FeedbackProvider, FeedbackRequest};

/// A configured mock reply.
#[derive(Debug, Clone)]
enum MockReply {
    /// Return this feedback text.
    Feedback(String),
    /// Return this error kind.
    Error(MockError),
}

/// Mock error kinds for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for FeedbackError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => {
                FeedbackError::RateLimited { retry_after_secs }
            }
            MockError::Unavailable { message } => FeedbackError::unavailable(message),
            MockError::AuthenticationFailed => FeedbackError::AuthenticationFailed,
            MockError::Network { message } => FeedbackError::network(message),
            MockError::Timeout { timeout_secs } => FeedbackError::Timeout { timeout_secs },
        }
    }
}

/// Mock feedback provider for testing.
///
/// Replies are consumed in configuration order; once the queue is empty a
/// canned default is returned so simple tests need no setup.
#[derive(Debug, Clone, Default)]
pub struct MockFeedbackProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<FeedbackRequest>>>,
    always_unavailable: bool,
}

impl MockFeedbackProvider {
    /// Creates a new mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that always reports the service as down.
    ///
    /// Used as the wired provider when no API key is configured, so the
    /// application's placeholder fallback kicks in.
    pub fn unavailable() -> Self {
        Self {
            always_unavailable: true,
            ..Self::default()
        }
    }

    /// Queues a feedback reply.
    pub fn with_feedback(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Feedback(text.into()));
        self
    }

    /// Queues an error reply.
    pub fn with_error(self, error: MockError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(error));
        self
    }

    /// Returns all requests seen so far.
    pub fn calls(&self) -> Vec<FeedbackRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the number of requests seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FeedbackProvider for MockFeedbackProvider {
    async fn generate(&self, request: FeedbackRequest) -> Result<Feedback, FeedbackError> {
        self.calls.lock().unwrap().push(request);

        if self.always_unavailable {
            return Err(FeedbackError::unavailable("feedback service not configured"));
        }

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Feedback(text)) => Ok(Feedback::new(text)),
            Some(MockReply::Error(error)) => Err(error.into()),
            None => Ok(Feedback::new(
                "Mock feedback: the calculated best option looks reasonable.",
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
