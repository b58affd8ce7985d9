//! GenerateFeedbackHandler - AI feedback with a fixed fallback.

use std::sync::Arc;

use crate::domain::analysis::DecisionEvaluator;
use crate::domain::decision::Decision;
use crate::ports::{Feedback, FeedbackProvider, FeedbackRequest};

/// Placeholder returned when the feedback service fails. The numeric
/// evaluation is computed locally and is never affected.
pub const FALLBACK_FEEDBACK: &str =
    "AI feedback is unavailable right now. The scored results are computed locally and remain valid.";

/// Command to generate feedback for a decision.
#[derive(Debug, Clone)]
pub struct GenerateFeedbackCommand {
    pub decision: Decision,
}

/// Handler for feedback generation.
///
/// Evaluates the decision, forwards the structured payload to the
/// feedback provider, and substitutes [`FALLBACK_FEEDBACK`] on any
/// provider error. Never fails.
pub struct GenerateFeedbackHandler {
    provider: Arc<dyn FeedbackProvider>,
}

impl GenerateFeedbackHandler {
    pub fn new(provider: Arc<dyn FeedbackProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, command: GenerateFeedbackCommand) -> Feedback {
        let report = DecisionEvaluator::evaluate(&command.decision);
        let request = FeedbackRequest::from_evaluation(&command.decision, &report);

        match self.provider.generate(request).await {
            Ok(feedback) => feedback,
            Err(error) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    %error,
                    retryable = error.is_retryable(),
                    "feedback generation failed, substituting placeholder"
                );
                Feedback::new(FALLBACK_FEEDBACK)
            }
        }
    }
}
