//! Lead form state model and timing configuration.

use std::time::Duration;

use crate::phone::is_valid_phone;

/// Time allowed for the intake endpoint to answer before the request is aborted.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(8000);
/// Time the success confirmation stays visible before the form resets.
pub const DEFAULT_SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Timing knobs for the submission pipeline.
pub struct LeadFormConfig {
    /// Deadline for a single intake request.
    pub request_timeout: Duration,
    /// How long the success confirmation is shown.
    pub success_display: Duration,
}

impl Default for LeadFormConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            success_display: DEFAULT_SUCCESS_DISPLAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Identifier of a submission attempt; outcomes carry the attempt they settle.
pub struct AttemptId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Mutually exclusive form states.
pub enum LeadStatus {
    /// Editable form.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// Success confirmation is showing.
    Submitted,
}

impl LeadStatus {
    /// Stable token used in `data-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// In-memory state owned by one rendered lead form.
///
/// Mutated only through [`crate::reduce_lead_form`].
pub struct LeadFormState {
    pub(crate) phone_number: String,
    pub(crate) status: LeadStatus,
    pub(crate) error_message: Option<String>,
    pub(crate) attempt: AttemptId,
}

impl LeadFormState {
    /// Current field value.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Current form status.
    pub fn status(&self) -> LeadStatus {
        self.status
    }

    /// Message from the last failed attempt, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Most recently started attempt.
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Whether a request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.status == LeadStatus::Submitting
    }

    /// Whether the success confirmation is showing.
    pub fn is_submitted(&self) -> bool {
        self.status == LeadStatus::Submitted
    }

    /// Whether the field currently holds a well-formed mobile number.
    pub fn phone_is_valid(&self) -> bool {
        is_valid_phone(&self.phone_number)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.status == LeadStatus::Idle && self.phone_is_valid()
    }
}
