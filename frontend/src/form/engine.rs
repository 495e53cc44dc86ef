//! Step-by-step form controller.
//!
//! The engine walks through a [`FormDefinition`] one field at a time. Only the
//! field on screen is validated, and only when moving forward. Confirming the
//! last step hands a [`ContactPayload`] to the caller, who delivers it and
//! reports back through [`FormEngine::finish_submission`].

use std::collections::{HashMap, HashSet};

use crate::form::dispatch::{ContactPayload, SubmissionError};
use crate::form::fields::{FormDefinition, FormError, FormField, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Completed,
    Failed,
}

/// Result of a forward move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Now showing the step at this index.
    Moved(usize),
    /// The current value failed validation; the step did not change.
    Rejected(ValidationError),
    /// Last step confirmed, deliver this payload.
    Submit(ContactPayload),
    /// A submission is in flight or already done.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct FormEngine {
    definition: FormDefinition,
    values: HashMap<String, String>,
    current_step: usize,
    touched: HashSet<String>,
    errors: HashMap<String, ValidationError>,
    status: SubmissionStatus,
}

impl FormEngine {
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            definition,
            values: HashMap::new(),
            current_step: 0,
            touched: HashSet::new(),
            errors: HashMap::new(),
            status: SubmissionStatus::Idle,
        }
    }

    fn is_locked(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting | SubmissionStatus::Completed)
    }

    pub fn set_field_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), FormError> {
        if !self.definition.contains(id) {
            return Err(FormError::UnknownField(id.to_string()));
        }
        if self.is_locked() {
            return Err(FormError::Locked);
        }

        self.values.insert(id.to_string(), value.into());
        self.errors.remove(id);
        self.touched.insert(id.to_string());
        Ok(())
    }

    pub fn go_next(&mut self) -> Advance {
        if self.is_locked() {
            return Advance::Ignored;
        }
        if self.status == SubmissionStatus::Failed {
            // Retrying starts over from a clean status on the same step.
            self.status = SubmissionStatus::Idle;
        }

        let field = self.current_field();
        let id = field.id.clone();
        if let Some(error) = field.validate(self.value(&id)) {
            self.errors.insert(id, error);
            return Advance::Rejected(error);
        }
        self.errors.remove(&id);

        if self.is_last_step() {
            self.status = SubmissionStatus::Submitting;
            Advance::Submit(ContactPayload::from_values(&self.values))
        } else {
            self.current_step += 1;
            Advance::Moved(self.current_step)
        }
    }

    /// The confirm button and the Enter key.
    pub fn confirm(&mut self) -> Advance {
        self.go_next()
    }

    /// Steps back without validating. Returns whether the step changed.
    pub fn go_prev(&mut self) -> bool {
        if self.is_locked() || self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        true
    }

    pub fn finish_submission(&mut self, outcome: Result<(), SubmissionError>) {
        if self.status != SubmissionStatus::Submitting {
            log::warn!("Ignoring submission outcome while {:?}", self.status);
            return;
        }

        match outcome {
            Ok(()) => self.status = SubmissionStatus::Completed,
            Err(e) => {
                log::error!("Submission error: {}", e);
                self.status = SubmissionStatus::Failed;
            }
        }
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.touched.clear();
        self.current_step = 0;
        self.status = SubmissionStatus::Idle;
    }

    /// Hides a displayed error without touching the value.
    pub fn dismiss_error(&mut self, id: &str) {
        self.errors.remove(id);
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.definition.step_count()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.step_count()
    }

    pub fn current_field(&self) -> &FormField {
        &self.definition.fields()[self.current_step]
    }

    pub fn value(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, id: &str) -> Option<ValidationError> {
        self.errors.get(id).copied()
    }

    pub fn is_touched(&self, id: &str) -> bool {
        self.touched.contains(id)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn progress_percent(&self) -> u32 {
        ((self.current_step + 1) * 100 / self.step_count()) as u32
    }

    /// Whether the confirm button should be enabled.
    pub fn can_confirm(&self) -> bool {
        let field = self.current_field();
        !self.is_locked() && field.validate(self.value(&field.id)).is_none()
    }
}
