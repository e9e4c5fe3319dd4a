//! Reducer actions, side-effect intents, and transition logic for the lead form.

use std::time::Duration;

use crate::model::{AttemptId, LeadFormConfig, LeadFormState, LeadStatus};
use crate::phone::is_valid_phone;
use crate::submit::SubmitError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_lead_form`].
pub enum LeadFormAction {
    /// Replace the field value (one keystroke or paste).
    EditPhone(String),
    /// Submit the current field value.
    Submit,
    /// Terminal outcome of a submission attempt.
    SubmissionSettled {
        /// Attempt the outcome belongs to.
        attempt: AttemptId,
        /// Result of the attempt.
        outcome: Result<(), SubmitError>,
    },
    /// Hide the success confirmation and reset the form.
    DismissSuccess {
        /// Attempt whose confirmation is being dismissed.
        attempt: AttemptId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_lead_form`] for the runtime to execute.
pub enum LeadEffect {
    /// Post the lead and report back with [`LeadFormAction::SubmissionSettled`].
    SendLead {
        /// Attempt being sent.
        attempt: AttemptId,
        /// Normalized phone number.
        phone: String,
    },
    /// Dispatch [`LeadFormAction::DismissSuccess`] after `after`.
    ScheduleDismiss {
        /// Attempt whose confirmation should be dismissed.
        attempt: AttemptId,
        /// Display delay.
        after: Duration,
    },
}

/// Applies a [`LeadFormAction`] to the form state and collects resulting side effects.
///
/// Transitions:
/// - `Submit` is ignored unless the form is idle. Invalid input sets the validation message and
///   emits nothing; valid input starts a new attempt and emits [`LeadEffect::SendLead`].
/// - `SubmissionSettled` is accepted once, for the attempt currently in flight.
/// - `DismissSuccess` is accepted only while that attempt's confirmation is showing.
pub fn reduce_lead_form(
    state: &mut LeadFormState,
    action: LeadFormAction,
    config: &LeadFormConfig,
) -> Vec<LeadEffect> {
    let mut effects = Vec::new();
    match action {
        LeadFormAction::EditPhone(value) => {
            if state.status != LeadStatus::Submitted {
                state.phone_number = value;
            }
        }
        LeadFormAction::Submit => {
            if state.status != LeadStatus::Idle {
                return effects;
            }
            if !is_valid_phone(&state.phone_number) {
                state.error_message = Some(SubmitError::InvalidPhone.to_string());
                return effects;
            }
            state.attempt = AttemptId(state.attempt.0 + 1);
            state.status = LeadStatus::Submitting;
            state.error_message = None;
            effects.push(LeadEffect::SendLead {
                attempt: state.attempt,
                phone: state.phone_number.trim().to_string(),
            });
        }
        LeadFormAction::SubmissionSettled { attempt, outcome } => {
            if state.status != LeadStatus::Submitting || attempt != state.attempt {
                return effects;
            }
            match outcome {
                Ok(()) => {
                    state.status = LeadStatus::Submitted;
                    state.error_message = None;
                    effects.push(LeadEffect::ScheduleDismiss {
                        attempt,
                        after: config.success_display,
                    });
                }
                Err(err) => {
                    state.status = LeadStatus::Idle;
                    state.error_message = Some(err.to_string());
                }
            }
        }
        LeadFormAction::DismissSuccess { attempt } => {
            if state.status == LeadStatus::Submitted && attempt == state.attempt {
                state.phone_number.clear();
                state.status = LeadStatus::Idle;
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reduce(state: &mut LeadFormState, action: LeadFormAction) -> Vec<LeadEffect> {
        reduce_lead_form(state, action, &LeadFormConfig::default())
    }

    fn typed(value: &str) -> LeadFormState {
        let mut state = LeadFormState::default();
        reduce(&mut state, LeadFormAction::EditPhone(value.to_string()));
        state
    }

    fn settle(attempt: u64, outcome: Result<(), SubmitError>) -> LeadFormAction {
        LeadFormAction::SubmissionSettled {
            attempt: AttemptId(attempt),
            outcome,
        }
    }

    #[test]
    fn fresh_form_is_idle_and_empty() {
        let state = LeadFormState::default();
        assert_eq!(state.phone_number(), "");
        assert_eq!(state.status(), LeadStatus::Idle);
        assert_eq!(state.error_message(), None);
        assert!(!state.can_submit());
    }

    #[test]
    fn submit_control_tracks_validity_on_every_keystroke() {
        let mut state = LeadFormState::default();
        for partial in ["0", "09", "0912", "0912345678"] {
            reduce(&mut state, LeadFormAction::EditPhone(partial.to_string()));
            assert!(!state.can_submit(), "{partial}");
        }
        reduce(&mut state, LeadFormAction::EditPhone("09123456789".into()));
        assert!(state.can_submit());
    }

    #[test]
    fn invalid_submit_sets_validation_message_without_effects() {
        let mut state = typed("9123");
        let effects = reduce(&mut state, LeadFormAction::Submit);

        assert_eq!(effects, Vec::new());
        assert_eq!(state.status(), LeadStatus::Idle);
        assert_eq!(
            state.error_message(),
            Some("Invalid phone number format. Use 09123456789.")
        );
        assert_eq!(state.attempt(), AttemptId(0));
    }

    #[test]
    fn valid_submit_clears_error_and_sends_once() {
        let mut state = typed("0912");
        reduce(&mut state, LeadFormAction::Submit);
        reduce(&mut state, LeadFormAction::EditPhone("09123456789".into()));

        let effects = reduce(&mut state, LeadFormAction::Submit);
        assert_eq!(
            effects,
            vec![LeadEffect::SendLead {
                attempt: AttemptId(1),
                phone: "09123456789".to_string(),
            }]
        );
        assert!(state.is_submitting());
        assert_eq!(state.error_message(), None);
        assert!(!state.can_submit());

        assert_eq!(reduce(&mut state, LeadFormAction::Submit), Vec::new());
        assert_eq!(state.attempt(), AttemptId(1));
    }

    #[test]
    fn success_shows_confirmation_then_resets_after_display_delay() {
        let mut state = typed("09123456789");
        reduce(&mut state, LeadFormAction::Submit);

        let effects = reduce(&mut state, settle(1, Ok(())));
        assert_eq!(
            effects,
            vec![LeadEffect::ScheduleDismiss {
                attempt: AttemptId(1),
                after: Duration::from_millis(3000),
            }]
        );
        assert!(state.is_submitted());
        assert_eq!(state.phone_number(), "09123456789");

        reduce(&mut state, LeadFormAction::EditPhone("ignored".into()));
        assert_eq!(state.phone_number(), "09123456789");

        reduce(
            &mut state,
            LeadFormAction::DismissSuccess {
                attempt: AttemptId(1),
            },
        );
        assert_eq!(state.status(), LeadStatus::Idle);
        assert_eq!(state.phone_number(), "");
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn failure_returns_to_idle_with_message_and_allows_retry() {
        let mut state = typed("09123456789");
        reduce(&mut state, LeadFormAction::Submit);
        reduce(
            &mut state,
            settle(1, Err(SubmitError::Rejected("Duplicate phone number".into()))),
        );

        assert_eq!(state.status(), LeadStatus::Idle);
        assert_eq!(state.error_message(), Some("Duplicate phone number"));
        assert_eq!(state.phone_number(), "09123456789");
        assert!(state.can_submit());

        let effects = reduce(&mut state, LeadFormAction::Submit);
        assert_eq!(effects.len(), 1);
        assert_eq!(state.error_message(), None);
        assert_eq!(state.attempt(), AttemptId(2));
    }

    #[test]
    fn only_one_outcome_is_accepted_per_attempt() {
        let mut state = typed("09123456789");
        reduce(&mut state, LeadFormAction::Submit);
        reduce(&mut state, settle(1, Err(SubmitError::TimedOut)));
        assert_eq!(
            state.error_message(),
            Some("Request timed out. Please try again.")
        );

        let snapshot = state.clone();
        assert_eq!(reduce(&mut state, settle(1, Ok(()))), Vec::new());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn stale_outcomes_and_dismissals_are_ignored() {
        let mut state = typed("09123456789");
        reduce(&mut state, LeadFormAction::Submit);
        reduce(&mut state, settle(1, Err(SubmitError::TimedOut)));
        reduce(&mut state, LeadFormAction::Submit);

        assert_eq!(reduce(&mut state, settle(1, Ok(()))), Vec::new());
        assert!(state.is_submitting());

        reduce(&mut state, settle(2, Ok(())));
        reduce(
            &mut state,
            LeadFormAction::DismissSuccess {
                attempt: AttemptId(1),
            },
        );
        assert!(state.is_submitted());
    }

    #[test]
    fn custom_display_delay_is_used_for_dismissal() {
        let config = LeadFormConfig {
            request_timeout: Duration::from_millis(500),
            success_display: Duration::from_millis(10),
        };
        let mut state = typed("09123456789");
        reduce_lead_form(&mut state, LeadFormAction::Submit, &config);
        let effects = reduce_lead_form(&mut state, settle(1, Ok(())), &config);
        assert_eq!(
            effects,
            vec![LeadEffect::ScheduleDismiss {
                attempt: AttemptId(1),
                after: Duration::from_millis(10),
            }]
        );
    }
}
