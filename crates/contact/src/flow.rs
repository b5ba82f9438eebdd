use std::{
    str::FromStr,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use validator::{Validate, ValidationErrors};

use crate::{ContactClient, ContactSubmission, Field, SubmitError, UnknownField};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// What the visitor is told after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
    Invalid,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Success => "Message sent successfully! We'll get back to you soon.",
            Notice::Failure => "Failed to send message. Please try again.",
            Notice::Invalid => "Please fill in every field with valid details.",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success)
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(SubmitError),
    /// Blocked before reaching the network.
    Invalid(ValidationErrors),
    /// Another submission of the same form is still outstanding.
    InFlight,
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Succeeded => Some(Notice::Success),
            SubmitOutcome::Failed(_) => Some(Notice::Failure),
            SubmitOutcome::Invalid(_) => Some(Notice::Invalid),
            SubmitOutcome::InFlight => None,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

/// State of one contact form instance.
///
/// The record is mutated one field at a time and sent as a snapshot. It is
/// cleared only after the endpoint acknowledged the submission; a failed
/// attempt leaves it exactly as it was. At most one submission is in flight.
pub struct ContactForm {
    record: Mutex<ContactSubmission>,
    submitting: AtomicBool,
    timeout: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ContactSubmission> for ContactForm {
    fn from(record: ContactSubmission) -> Self {
        Self {
            record: Mutex::new(record),
            submitting: AtomicBool::new(false),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        ContactSubmission::default().into()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Applies one input event, identified by the input's `name` attribute.
    pub fn update(&self, input_name: &str, value: impl Into<String>) -> Result<Field, UnknownField> {
        let field = Field::from_str(input_name).map_err(|_| UnknownField(input_name.to_owned()))?;
        self.set(field, value);

        Ok(field)
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        self.record().set(field, value);
    }

    pub fn snapshot(&self) -> ContactSubmission {
        self.record().clone()
    }

    pub fn phase(&self) -> Phase {
        if self.is_submitting() {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub async fn submit<C>(&self, client: &C) -> SubmitOutcome
    where
        C: ContactClient + ?Sized,
    {
        let Some(_guard) = SubmittingGuard::acquire(&self.submitting) else {
            tracing::debug!("contact submission already in flight, ignoring");
            return SubmitOutcome::InFlight;
        };

        let snapshot = self.snapshot();
        if let Err(errors) = snapshot.validate() {
            return SubmitOutcome::Invalid(errors);
        }

        let result = match tokio::time::timeout(self.timeout, client.submit(&snapshot)).await {
            Ok(result) => result,
            Err(_) => Err(SubmitError::Timeout(self.timeout)),
        };

        match result {
            Ok(()) => {
                *self.record() = ContactSubmission::default();
                tracing::info!("contact submission sent");

                SubmitOutcome::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");

                SubmitOutcome::Failed(err)
            }
        }
    }

    fn record(&self) -> MutexGuard<'_, ContactSubmission> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the submitting flag when the attempt ends, including when the
/// awaiting task is dropped mid-request.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
