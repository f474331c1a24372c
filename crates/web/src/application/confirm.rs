//! Confirmation before a destructive submission
//!
//! Declining is the designed cancellation path, not an error. A prompt the
//! host cannot show counts as declined so the destructive action never runs
//! unconfirmed.

use crate::ports::outbound::{DialogPort, SubmitDecision};

pub struct ConfirmGuard<G> {
    dialog: G,
    message: String,
}

impl<G: DialogPort> ConfirmGuard<G> {
    pub fn new(dialog: G, message: impl Into<String>) -> Self {
        Self {
            dialog,
            message: message.into(),
        }
    }

    /// Ask the user; block until answered.
    pub fn check(&self) -> SubmitDecision {
        match self.dialog.confirm(&self.message) {
            Ok(true) => SubmitDecision::Proceed,
            Ok(false) => {
                tracing::info!("Submission cancelled by user");
                SubmitDecision::Cancel
            }
            Err(e) => {
                tracing::warn!("Confirmation prompt failed, cancelling submission: {}", e);
                SubmitDecision::Cancel
            }
        }
    }
}
