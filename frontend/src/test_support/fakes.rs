use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::pages::contact::repository::{LeadSink, LeadSubmission, SubmissionError};
use crate::pages::contact::view_model::LeadServices;
use crate::state::theme::{
    PreferenceStore, SystemThemeSignal, Theme, ThemePreference, ThemeSurface,
};
use crate::utils::storage::StorageError;
use crate::utils::timer::Delay;

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct FixedSystemSignal(pub bool);

impl SystemThemeSignal for FixedSystemSignal {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    applied: RefCell<Vec<Theme>>,
}

impl RecordingSurface {
    pub fn applied(&self) -> Vec<Theme> {
        self.applied.borrow().clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Records every lead it is handed and answers with a canned result.
#[derive(Default)]
pub struct ScriptedSink {
    latency: Duration,
    failure: RefCell<Option<SubmissionError>>,
    received: RefCell<Vec<LeadSubmission>>,
}

impl ScriptedSink {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(error: SubmissionError) -> Self {
        Self {
            failure: RefCell::new(Some(error)),
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn recover(&self) {
        self.failure.borrow_mut().take();
    }

    pub fn calls(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn received(&self) -> Vec<LeadSubmission> {
        self.received.borrow().clone()
    }
}

#[async_trait(?Send)]
impl LeadSink for ScriptedSink {
    async fn send(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        self.received.borrow_mut().push(lead.clone());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Theme preference backed by in-memory fakes; call inside a Leptos runtime.
pub fn memory_theme(prefers_dark: bool) -> ThemePreference {
    ThemePreference::new(
        Rc::new(MemoryStore::default()),
        Rc::new(FixedSystemSignal(prefers_dark)),
        Rc::new(RecordingSurface::default()),
    )
}

pub fn scripted_services(sink: Rc<ScriptedSink>) -> LeadServices {
    LeadServices {
        sink,
        delay: Rc::new(TokioDelay),
    }
}
