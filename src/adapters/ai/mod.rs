//! AI Feedback Adapters.
//!
//! Implementations of the FeedbackProvider port.
//!
//! ## Available Adapters
//!
//! - `GeminiFeedbackProvider` - Google Gemini generateContent API
//! - `MockFeedbackProvider` - configurable test double

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiFeedbackProvider};
pub use mock_provider::{MockError, MockFeedbackProvider};
