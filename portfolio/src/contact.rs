//! Orchestration for a single contact form submission.

use tracing::{debug, info, warn};

use crate::core::form::FieldErrors;
use crate::core::submission::{ContactForm, Notification, SubmitAttempt};
use crate::io::transport::Transport;

/// What a submit click resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Validation failed; no transport call was made.
    Blocked(FieldErrors),
    /// A submission was already in flight; this click was a no-op.
    AlreadySending,
    /// The transport call settled; the notification describes the outcome.
    Settled(Notification),
}

/// Validate, send at most once, and apply the outcome to `form`.
///
/// Transport errors end here as a failure notification; they are never
/// returned to the caller.
pub async fn submit<T: Transport>(form: &mut ContactForm, transport: &T) -> SubmitReport {
    let snapshot = match form.begin_submit() {
        SubmitAttempt::Dispatch(snapshot) => snapshot,
        SubmitAttempt::Blocked(errors) => {
            debug!(fields = errors.len(), "submission blocked by validation");
            return SubmitReport::Blocked(errors);
        }
        SubmitAttempt::AlreadySending => {
            debug!("submission already in flight; ignoring");
            return SubmitReport::AlreadySending;
        }
    };

    let outcome = transport.send(&snapshot).await;
    if let Err(err) = &outcome {
        let error = format!("{:#}", err);
        warn!(%error, "contact submission failed");
    }
    let notification = form.settle(&outcome);
    info!(kind = ?notification.kind, "contact submission settled");
    SubmitReport::Settled(notification)
}
