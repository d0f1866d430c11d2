//! Linear step controller and the generic registration form around it.

use super::errors::FieldErrors;
use crate::models::{generate_user_id, BiometricData, Registration};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

/// Position in a linear sequence of steps numbered `1..=total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: usize,
    total: usize,
}

impl Wizard {
    /// A wizard always has at least one step.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Whether `step` is already behind the current position.
    pub fn is_completed(&self, step: usize) -> bool {
        step < self.current
    }

    /// Move forward one step. Returns false on the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move back one step, stopping at the first.
    pub fn back(&mut self) -> usize {
        self.current = self.current.saturating_sub(1).max(1);
        self.current
    }
}

/// Identity and timestamps given to a record when it is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMeta {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub biometric: Option<BiometricData>,
}

/// Raw input of a multi-step registration form.
pub trait FormSteps {
    /// Step titles in order; the step count is their length.
    const STEPS: &'static [&'static str];

    /// Errors for the fields shown on `step` (1-based).
    fn validate_step(&self, step: usize, today: NaiveDate) -> FieldErrors;

    /// Build the typed record. Called only after every step passed.
    fn build(&self, meta: RecordMeta) -> Result<Registration, FieldErrors>;
}

/// A registration wizard over input `I`.
#[derive(Debug, Clone)]
pub struct RegistrationForm<I: FormSteps> {
    input: I,
    wizard: Wizard,
    biometric: Option<BiometricData>,
    today: Option<NaiveDate>,
}

impl<I: FormSteps> RegistrationForm<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            wizard: Wizard::new(I::STEPS.len()),
            biometric: None,
            today: None,
        }
    }

    /// Fix the date that age and "not in the future" rules compare against.
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn current_step(&self) -> usize {
        self.wizard.current()
    }

    pub fn step_title(&self, step: usize) -> Option<&'static str> {
        step.checked_sub(1).and_then(|i| I::STEPS.get(i)).copied()
    }

    pub fn validate_step(&self, step: usize) -> FieldErrors {
        I::validate_step(&self.input, step, self.today())
    }

    pub fn validate_current_step(&self) -> FieldErrors {
        self.validate_step(self.wizard.current())
    }

    /// Advance when the current step's gate passes.
    ///
    /// # Errors
    ///
    /// Returns the current step's field errors; the step does not change.
    pub fn next_step(&mut self) -> Result<usize, FieldErrors> {
        let errors = self.validate_current_step();
        if !errors.is_empty() {
            debug!(step = self.wizard.current(), errors = errors.len(), "Step gate failed");
            return Err(errors);
        }
        self.wizard.advance();
        Ok(self.wizard.current())
    }

    pub fn previous_step(&mut self) -> usize {
        self.wizard.back()
    }

    /// Errors across every step.
    pub fn validate_all(&self) -> FieldErrors {
        let today = self.today();
        let mut errors = FieldErrors::new();
        for step in 1..=self.wizard.total() {
            errors.extend(I::validate_step(&self.input, step, today));
        }
        errors
    }

    /// Attach the result of a successful biometric capture.
    pub fn attach_biometric(&mut self, data: BiometricData) {
        self.biometric = Some(data);
    }

    pub fn biometric(&self) -> Option<&BiometricData> {
        self.biometric.as_ref()
    }

    /// Validate everything and build the record.
    ///
    /// Entered values are left untouched whether or not submission succeeds.
    ///
    /// # Errors
    ///
    /// Returns every field error when any step fails.
    pub fn submit(&self) -> Result<Registration, FieldErrors> {
        let errors = self.validate_all();
        if !errors.is_empty() {
            return Err(errors);
        }

        self.input.build(RecordMeta {
            id: generate_user_id(),
            created_at: Utc::now(),
            biometric: self.biometric.clone(),
        })
    }
}
