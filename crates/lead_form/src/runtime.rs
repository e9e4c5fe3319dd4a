//! Effect execution against host services.

use std::rc::Rc;

use leptos::logging;
use platform_host::{DelayService, LeadIntakeService};

use crate::endpoint::LeadEndpoint;
use crate::model::LeadFormConfig;
use crate::reducer::{LeadEffect, LeadFormAction};
use crate::submit::submit_lead;

#[derive(Clone)]
/// Host services and configuration the lead form runtime executes effects with.
pub struct LeadFormServices {
    /// Transport used to post leads.
    pub intake: Rc<dyn LeadIntakeService>,
    /// Timer used for the request deadline and the confirmation delay.
    pub delay: Rc<dyn DelayService>,
    /// Endpoint leads are posted to.
    pub endpoint: LeadEndpoint,
    /// Timing configuration.
    pub config: LeadFormConfig,
}

impl LeadFormServices {
    /// Wires the compile-time selected browser adapters with the build-time endpoint.
    pub fn browser(config: LeadFormConfig) -> Self {
        Self {
            intake: Rc::new(platform_host_web::lead_intake_service()),
            delay: Rc::new(platform_host_web::delay_service()),
            endpoint: LeadEndpoint::configured().clone(),
            config,
        }
    }
}

/// Executes one [`LeadEffect`] and returns the action to dispatch when it completes.
pub async fn run_effect(services: &LeadFormServices, effect: LeadEffect) -> Option<LeadFormAction> {
    match effect {
        LeadEffect::SendLead { attempt, phone } => {
            let outcome = submit_lead(
                services.intake.as_ref(),
                services.delay.as_ref(),
                &services.endpoint,
                &phone,
                services.config.request_timeout,
            )
            .await;
            match &outcome {
                Ok(()) => logging::log!("lead attempt {} accepted", attempt.0),
                Err(err) => logging::warn!(
                    "lead attempt {} failed ({}): {err}",
                    attempt.0,
                    err.kind()
                ),
            }
            Some(LeadFormAction::SubmissionSettled { attempt, outcome })
        }
        LeadEffect::ScheduleDismiss { attempt, after } => {
            services.delay.sleep(after).await;
            Some(LeadFormAction::DismissSuccess { attempt })
        }
    }
}
