//! Phone-number lead capture form: validation, submission state machine, and Leptos component.
//!
//! [`reduce_lead_form`] owns every state transition and emits [`LeadEffect`]s, which
//! [`run_effect`] executes against host services from `platform_host`. The [`LeadForm`]
//! component wires both to signals and the browser adapters from `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod endpoint;
mod model;
mod phone;
mod reducer;
mod runtime;
mod submit;

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::*;
use system_ui::{
    Button, ButtonSize, ButtonType, ButtonVariant, FieldVariant, Heading, Icon, IconName,
    IconSize, LayoutAlign, LayoutGap, Spinner, Stack, Text, TextField, TextRole, TextTone,
};

pub use endpoint::{LeadEndpoint, API_BASE_URL_ENV, LEAD_INTAKE_PATH};
pub use model::{
    AttemptId, LeadFormConfig, LeadFormState, LeadStatus, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_SUCCESS_DISPLAY,
};
pub use phone::{is_valid_phone, PHONE_EXAMPLE, PHONE_INPUT_PATTERN, PHONE_LENGTH, PHONE_PREFIX};
pub use reducer::{reduce_lead_form, LeadEffect, LeadFormAction};
pub use runtime::{run_effect, LeadFormServices};
pub use submit::{
    submit_lead, SubmitError, GENERIC_FAILURE_MESSAGE, UNEXPECTED_FAILURE_MESSAGE,
};

type SharedServices = StoredValue<Rc<LeadFormServices>>;

/// Reduces `action` into the form state and spawns the resulting effects.
///
/// Effects feed their follow-up action back through this function. Dispatches that arrive after
/// the owning component was disposed are dropped.
fn dispatch(state: RwSignal<LeadFormState>, services: SharedServices, action: LeadFormAction) {
    let Some(config) = services.try_with_value(|services| services.config) else {
        return;
    };
    let Some(effects) = state.try_update(|current| reduce_lead_form(current, action, &config))
    else {
        return;
    };
    for effect in effects {
        let Some(runtime) = services.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Some(next) = run_effect(&runtime, effect).await {
                dispatch(state, services, next);
            }
        });
    }
}

#[component]
/// Lead capture card: phone field, submit control, inline error, and success confirmation.
pub fn LeadForm(
    /// Timing overrides; defaults to an 8 s request deadline and a 3 s confirmation.
    #[prop(optional)]
    config: Option<LeadFormConfig>,
) -> impl IntoView {
    let services: SharedServices = store_value(Rc::new(LeadFormServices::browser(
        config.unwrap_or_default(),
    )));
    let state = create_rw_signal(LeadFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(state, services, LeadFormAction::Submit);
    };
    let on_input = Callback::new(move |ev: web_sys::Event| {
        dispatch(
            state,
            services,
            LeadFormAction::EditPhone(event_target_value(&ev)),
        );
    });

    let phone = Signal::derive(move || state.with(|s| s.phone_number().to_string()));
    let submitting = Signal::derive(move || state.with(LeadFormState::is_submitting));
    let submit_disabled = Signal::derive(move || !state.with(LeadFormState::can_submit));
    let error_message = move || state.with(|s| s.error_message().map(str::to_string));
    let max_length = PHONE_LENGTH as u32;

    view! {
        <div class="lead-form" data-lead-status=move || state.with(|s| s.status().token())>
            <Show
                when=move || !state.with(LeadFormState::is_submitted)
                fallback=|| view! { <LeadConfirmation /> }
            >
                <form on:submit=on_submit>
                    <Stack gap=LayoutGap::Lg>
                        <Stack gap=LayoutGap::Sm>
                            <label for="phone" class="lead-form-label">
                                "Enter your mobile number"
                            </label>
                            <div class="lead-form-field">
                                <Icon
                                    icon=IconName::Phone
                                    size=IconSize::Md
                                    layout_class="lead-form-field-icon"
                                />
                                <TextField
                                    variant=FieldVariant::LeadingIcon
                                    id="phone"
                                    name="phone"
                                    input_type="tel"
                                    input_mode="numeric"
                                    autocomplete="tel"
                                    placeholder=PHONE_EXAMPLE
                                    pattern=PHONE_INPUT_PATTERN
                                    max_length=max_length
                                    required=true
                                    value=phone
                                    invalid=Signal::derive(move || {
                                        state.with(|s| s.error_message().is_some())
                                    })
                                    on_input=on_input
                                />
                            </div>
                            <Text
                                role=TextRole::Caption
                                tone=TextTone::Secondary
                                layout_class="lead-form-hint"
                            >
                                {format!("Example: {PHONE_EXAMPLE}")}
                            </Text>
                        </Stack>

                        {move || {
                            error_message()
                                .map(|message| {
                                    view! {
                                        <p class="lead-form-error" role="status">
                                            {message}
                                        </p>
                                    }
                                })
                        }}

                        <Button
                            button_type=ButtonType::Submit
                            variant=ButtonVariant::Primary
                            size=ButtonSize::Lg
                            layout_class="lead-form-submit"
                            disabled=submit_disabled
                            busy=submitting
                        >
                            {move || {
                                if submitting.get() {
                                    view! {
                                        <Spinner ui_slot="leading" />
                                        "Processing..."
                                    }
                                        .into_view()
                                } else {
                                    "Submit".into_view()
                                }
                            }}
                        </Button>
                    </Stack>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn LeadConfirmation() -> impl IntoView {
    view! {
        <div class="lead-confirmation" aria-live="polite">
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                <Icon
                    icon=IconName::CheckCircle
                    size=IconSize::Xl
                    layout_class="lead-confirmation-icon"
                />
                <Heading role=TextRole::Title level=3>
                    "Your number has been registered successfully!"
                </Heading>
                <Text tone=TextTone::Secondary>"We'll contact you shortly"</Text>
            </Stack>
        </div>
    }
}
