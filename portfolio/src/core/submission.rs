//! Contact form state machine.
//!
//! [`ContactForm`] owns the field values, the current validation errors and
//! the submission status. It never performs I/O: a submit is split into
//! [`ContactForm::begin_submit`], which decides whether a transport call is
//! allowed, and [`ContactForm::settle`], which applies the transport outcome.
//! The `sending` status is the only guard against overlapping submissions.

use anyhow::Result;
use serde::Serialize;

use crate::core::form::{Field, FieldErrors, FormState, validate};

pub const SUCCESS_TITLE: &str = "Message sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Error";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Transient message shown after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
        }
    }

    /// Failure notification carrying `detail`, or the generic text when blank.
    pub fn failure(detail: &str) -> Self {
        let detail = detail.trim();
        let description = if detail.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            detail.to_string()
        };
        Self {
            kind: NotificationKind::Failure,
            title: FAILURE_TITLE.to_string(),
            description,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Decision made by [`ContactForm::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; send this snapshot. Status is now `sending`.
    Dispatch(FormState),
    /// Validation failed; nothing is sent and status is unchanged.
    Blocked(FieldErrors),
    /// A submission is already in flight; the attempt is ignored.
    AlreadySending,
}

/// Locally owned contact form state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    form: FormState,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled values (errors empty, status idle).
    pub fn with_values(form: FormState) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The submit control must be disabled while a submission is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Store `value` and drop any error on that field. Other fields keep
    /// their errors until the next submit.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.status == SubmissionStatus::Sending {
            return SubmitAttempt::AlreadySending;
        }
        let errors = validate(&self.form);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitAttempt::Blocked(errors);
        }
        self.errors = FieldErrors::default();
        self.status = SubmissionStatus::Sending;
        SubmitAttempt::Dispatch(self.form.clone())
    }

    /// Apply the transport outcome. Status always returns to idle; the form
    /// is cleared only on success. A failure shows the outermost error
    /// message only; context layers stay out of the notification.
    pub fn settle(&mut self, outcome: &Result<()>) -> Notification {
        self.status = SubmissionStatus::Idle;
        match outcome {
            Ok(()) => {
                self.form = FormState::default();
                Notification::success()
            }
            Err(err) => Notification::failure(&err.to_string()),
        }
    }
}
