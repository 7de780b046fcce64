use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use super::utils::{FormFields, LicenseType};
use crate::config::EndpointSource;
use crate::utils::timer::Delay;

pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("lead request failed: {0}")]
    Transport(String),
    #[error("lead endpoint rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("lead sink unavailable: {0}")]
    Unavailable(String),
}

/// A validated lead, ready to hand to a sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: LicenseType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl LeadSubmission {
    /// Returns `None` when no license type is selected; every other field is
    /// taken as-is, so run validation first.
    pub fn from_fields(fields: &FormFields) -> Option<Self> {
        Some(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            company: fields.company.clone(),
            license_type: fields.license_type?,
            message: fields.message.clone(),
        })
    }
}

#[async_trait(?Send)]
pub trait LeadSink {
    async fn send(&self, lead: &LeadSubmission) -> Result<(), SubmissionError>;
}

/// Stand-in for a backend: waits, logs the lead and reports success.
#[derive(Clone)]
pub struct SimulatedLeadSink {
    delay: Rc<dyn Delay>,
    latency: Duration,
}

impl SimulatedLeadSink {
    pub fn new(delay: Rc<dyn Delay>) -> Self {
        Self {
            delay,
            latency: SIMULATED_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait(?Send)]
impl LeadSink for SimulatedLeadSink {
    async fn send(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        self.delay.wait(self.latency).await;
        log::info!(
            "lead {} received: {} <{}> at {} ({})",
            lead.id,
            lead.name,
            lead.email,
            lead.company,
            lead.license_type
        );
        Ok(())
    }
}

pub struct HttpLeadSink {
    client: Client,
    endpoint: String,
}

impl HttpLeadSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl LeadSink for HttpLeadSink {
    async fn send(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

pub fn lead_sink_from_config(endpoint: Option<String>, delay: Rc<dyn Delay>) -> Rc<dyn LeadSink> {
    match endpoint {
        Some(url) => {
            log::info!("posting leads to {url}");
            Rc::new(HttpLeadSink::new(url))
        }
        None => {
            log::info!("no lead endpoint configured; using simulated sink");
            Rc::new(SimulatedLeadSink::new(delay))
        }
    }
}

/// Picks the HTTP or simulated sink the first time a lead is sent, once the
/// endpoint source has answered, then reuses that choice.
pub struct ConfiguredLeadSink {
    source: Rc<dyn EndpointSource>,
    delay: Rc<dyn Delay>,
    resolved: RefCell<Option<Rc<dyn LeadSink>>>,
}

impl ConfiguredLeadSink {
    pub fn new(source: Rc<dyn EndpointSource>, delay: Rc<dyn Delay>) -> Self {
        Self {
            source,
            delay,
            resolved: RefCell::new(None),
        }
    }

    async fn sink(&self) -> Rc<dyn LeadSink> {
        // Clone out so no borrow is held across the await.
        let cached = self.resolved.borrow().clone();
        if let Some(sink) = cached {
            return sink;
        }
        let sink = lead_sink_from_config(self.source.lead_endpoint().await, self.delay.clone());
        self.resolved.borrow_mut().get_or_insert(sink).clone()
    }
}

#[async_trait(?Send)]
impl LeadSink for ConfiguredLeadSink {
    async fn send(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        self.sink().await.send(lead).await
    }
}
