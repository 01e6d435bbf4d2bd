//! Step wizard controller.
//!
//! A wizard walks an ordered list of steps. Forward progress is one step at
//! a time; going back stops at the first step; jumps go anywhere valid.
//! Each step contributes a flat map of answers, merged into one result that
//! is handed to the completion callback when the user moves past the last
//! step.
//!
//! Completion is an event rather than a state: the index stays on the last
//! step and another [`WizardController::go_next`] fires the callback again.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::WizardError;

/// Answers collected by one step.
pub type StepData = serde_json::Map<String, Value>;

/// Step id to that step's answers.
pub type AccumulatedData = BTreeMap<String, StepData>;

type CompleteCallback = Box<dyn FnMut(&AccumulatedData)>;

/// One step of a wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    pub id: String,
    pub title: String,
}

impl StepDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Outcome of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Nothing changed (first step on `go_back`, invalid jump target).
    Stayed,
    /// `go_next` on the last step fired the completion callback.
    Completed,
}

/// Snapshot of a wizard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardState {
    current_step_index: usize,
    steps: Vec<StepDescriptor>,
    accumulated_data: AccumulatedData,
}

impl WizardState {
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn current_step(&self) -> &StepDescriptor {
        &self.steps[self.current_step_index]
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn accumulated_data(&self) -> &AccumulatedData {
        &self.accumulated_data
    }

    pub fn step_data(&self, step_id: &str) -> Option<&StepData> {
        self.accumulated_data.get(step_id)
    }

    pub fn step_index(&self, step_id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == step_id)
    }

    pub fn is_first(&self) -> bool {
        self.current_step_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_step_index + 1 == self.steps.len()
    }

    /// One-based position and step count, for "Step 2 of 5" labels.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_step_index + 1, self.steps.len())
    }
}

/// Drives a [`WizardState`].
pub struct WizardController {
    state: WizardState,
    on_complete: Option<CompleteCallback>,
}

impl WizardController {
    /// Build a wizard positioned on the first step.
    ///
    /// # Errors
    ///
    /// Fails when `steps` is empty, contains an empty id, or repeats an id.
    pub fn new(steps: Vec<StepDescriptor>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }
        let mut seen = HashSet::new();
        for (index, step) in steps.iter().enumerate() {
            if step.id.is_empty() {
                return Err(WizardError::EmptyStepId { index });
            }
            if !seen.insert(step.id.as_str()) {
                return Err(WizardError::DuplicateStep(step.id.clone()));
            }
        }
        Ok(Self {
            state: WizardState {
                current_step_index: 0,
                steps,
                accumulated_data: AccumulatedData::new(),
            },
            on_complete: None,
        })
    }

    #[must_use]
    pub fn on_complete(mut self, callback: impl FnMut(&AccumulatedData) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> &StepDescriptor {
        self.state.current_step()
    }

    /// Advance one step, or fire completion on the last step.
    pub fn go_next(&mut self) -> Navigation {
        if self.state.is_last() {
            info!(steps = self.state.steps.len(), "wizard completed");
            if let Some(callback) = self.on_complete.as_mut() {
                callback(&self.state.accumulated_data);
            }
            return Navigation::Completed;
        }
        self.move_to(self.state.current_step_index + 1)
    }

    /// Step back, staying put on the first step.
    pub fn go_back(&mut self) -> Navigation {
        if self.state.is_first() {
            return Navigation::Stayed;
        }
        self.move_to(self.state.current_step_index - 1)
    }

    /// Jump to the step with `step_id`; unknown ids are ignored.
    pub fn jump_to(&mut self, step_id: &str) -> Navigation {
        match self.state.step_index(step_id) {
            Some(index) => self.move_to(index),
            None => {
                debug!(step_id, "ignoring jump to unknown step");
                Navigation::Stayed
            }
        }
    }

    /// Jump by index; out-of-range indices are ignored.
    pub fn jump_to_index(&mut self, index: usize) -> Navigation {
        if index >= self.state.steps.len() {
            debug!(index, "ignoring jump past the last step");
            return Navigation::Stayed;
        }
        self.move_to(index)
    }

    /// Shallow-merge `partial` into the answers of `step_id`.
    ///
    /// Keys in `partial` overwrite earlier values; no key is ever removed.
    /// Returns false (and changes nothing) for an unknown step.
    pub fn update_step_data(&mut self, step_id: &str, partial: StepData) -> bool {
        if self.state.step_index(step_id).is_none() {
            debug!(step_id, "ignoring data for unknown step");
            return false;
        }
        let entry = self
            .state
            .accumulated_data
            .entry(step_id.to_string())
            .or_default();
        for (key, value) in partial {
            entry.insert(key, value);
        }
        true
    }

    /// Record a single answer and advance, as a choice card does.
    pub fn select_and_advance(
        &mut self,
        step_id: &str,
        field: &str,
        value: impl Into<Value>,
    ) -> Navigation {
        let mut partial = StepData::new();
        partial.insert(field.to_string(), value.into());
        self.update_step_data(step_id, partial);
        self.go_next()
    }

    fn move_to(&mut self, index: usize) -> Navigation {
        let from = self.state.current_step_index;
        if from == index {
            return Navigation::Stayed;
        }
        self.state.current_step_index = index;
        debug!(
            from,
            to = index,
            step = %self.state.steps[index].id,
            "wizard step changed"
        );
        Navigation::Moved { from, to: index }
    }
}
