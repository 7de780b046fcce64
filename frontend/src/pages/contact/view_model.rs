use leptos::*;
use std::rc::Rc;
use std::time::Duration;

use super::repository::{LeadSink, LeadSubmission, SubmissionError};
use super::utils::{validate_fields, FormFields, LeadField, ValidationErrors};
use crate::utils::timer::Delay;

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    SubmittedSuccess,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was not idle (sending, or showing the success banner); nothing happened.
    Busy,
    Invalid,
    Sent,
    Failed(SubmissionError),
}

#[derive(Clone)]
pub struct LeadServices {
    pub sink: Rc<dyn LeadSink>,
    pub delay: Rc<dyn Delay>,
}

#[derive(Clone)]
pub struct LeadFormController {
    fields: RwSignal<FormFields>,
    errors: RwSignal<ValidationErrors>,
    status: RwSignal<SubmissionStatus>,
    sink: Rc<dyn LeadSink>,
    delay: Rc<dyn Delay>,
}

impl LeadFormController {
    pub fn new(sink: Rc<dyn LeadSink>, delay: Rc<dyn Delay>) -> Self {
        Self {
            fields: create_rw_signal(FormFields::default()),
            errors: create_rw_signal(ValidationErrors::new()),
            status: create_rw_signal(SubmissionStatus::Idle),
            sink,
            delay,
        }
    }

    pub fn fields(&self) -> ReadSignal<FormFields> {
        self.fields.read_only()
    }

    pub fn errors(&self) -> ReadSignal<ValidationErrors> {
        self.errors.read_only()
    }

    pub fn status(&self) -> ReadSignal<SubmissionStatus> {
        self.status.read_only()
    }

    /// Stores the edit and drops that field's error, if any. Other fields
    /// keep whatever errors they had.
    pub fn set_field(&self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        self.fields.update(|fields| fields.set(field, value));
        if self.errors.with_untracked(|errors| errors.contains_key(&field)) {
            self.errors.update(|errors| {
                errors.remove(&field);
            });
        }
    }

    /// Recomputes every field's error. The error map is only replaced while
    /// idle: a submission in flight or on display keeps it empty.
    pub fn validate(&self) -> (bool, ValidationErrors) {
        let errors = self.fields.with_untracked(validate_fields);
        if self.status.get_untracked() == SubmissionStatus::Idle {
            self.errors.set(errors.clone());
        }
        (errors.is_empty(), errors)
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let status = self.status.get_untracked();
        if status != SubmissionStatus::Idle {
            log::debug!("lead form is {:?}; ignoring submit", status);
            return SubmitOutcome::Busy;
        }

        let (valid, errors) = self.validate();
        if !valid {
            log::debug!("lead form has {} invalid field(s)", errors.len());
            return SubmitOutcome::Invalid;
        }
        let Some(lead) = self.fields.with_untracked(LeadSubmission::from_fields) else {
            return SubmitOutcome::Invalid;
        };

        self.status.set(SubmissionStatus::Submitting);

        match self.sink.send(&lead).await {
            Ok(()) => {
                log::info!("lead {} submitted", lead.id);
                self.fields.set(FormFields::default());
                self.status.set(SubmissionStatus::SubmittedSuccess);

                self.delay.wait(SUCCESS_DISPLAY).await;
                if self.status.get_untracked() == SubmissionStatus::SubmittedSuccess {
                    self.status.set(SubmissionStatus::Idle);
                }
                SubmitOutcome::Sent
            }
            Err(err) => {
                log::error!("lead {} submission failed: {}", lead.id, err);
                self.status.set(SubmissionStatus::Idle);
                SubmitOutcome::Failed(err)
            }
        }
    }
}

pub fn use_lead_form_controller() -> LeadFormController {
    let services = expect_context::<LeadServices>();
    LeadFormController::new(services.sink, services.delay)
}
