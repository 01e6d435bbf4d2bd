//! First-run onboarding wizard.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use venture_model::UserRole;

use crate::collection::SelectionSet;
use crate::error::WizardError;
use crate::wizard::{AccumulatedData, Navigation, StepData, StepDescriptor, WizardController};

pub const ROLE_STEP: &str = "role";
pub const PROFILE_STEP: &str = "profile";
pub const MINDSET_STEP: &str = "mindset";
pub const INTELLIGENCE_STEP: &str = "intelligence";
pub const DIRECTION_STEP: &str = "direction";

/// Areas offered on the direction step.
pub const INTEREST_AREAS: &[&str] = &[
    "ai",
    "climate",
    "fintech",
    "healthcare",
    "deep-tech",
    "consumer",
];

fn onboarding_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new(ROLE_STEP, "Choose your role"),
        StepDescriptor::new(PROFILE_STEP, "Tell us about yourself"),
        StepDescriptor::new(MINDSET_STEP, "Your mindset"),
        StepDescriptor::new(INTELLIGENCE_STEP, "Market intelligence"),
        StepDescriptor::new(DIRECTION_STEP, "Pick your direction"),
    ]
}

/// Typed reading of the onboarding answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingSummary {
    pub role: Option<UserRole>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub interests: Vec<String>,
    pub completed: bool,
}

/// Onboarding screens on top of a [`WizardController`].
pub struct OnboardingFlow {
    wizard: WizardController,
    interests: SelectionSet,
    completed: bool,
}

impl OnboardingFlow {
    pub fn new() -> Result<Self, WizardError> {
        Ok(Self {
            wizard: WizardController::new(onboarding_steps())?,
            interests: SelectionSet::new(),
            completed: false,
        })
    }

    #[must_use]
    pub fn on_complete(mut self, callback: impl FnMut(&AccumulatedData) + 'static) -> Self {
        self.wizard = self.wizard.on_complete(callback);
        self
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    /// Role card click: records the role and moves to the profile step.
    pub fn select_role(&mut self, role: UserRole) -> Navigation {
        self.wizard.select_and_advance(ROLE_STEP, "role", role.as_str())
    }

    pub fn set_profile(&mut self, name: &str, company: Option<&str>) {
        let mut partial = StepData::new();
        partial.insert("name".to_string(), Value::from(name));
        if let Some(company) = company {
            partial.insert("company".to_string(), Value::from(company));
        }
        self.wizard.update_step_data(PROFILE_STEP, partial);
    }

    /// Record a free-form answer on any step. Unknown steps are ignored.
    pub fn answer(&mut self, step_id: &str, question: &str, value: impl Into<Value>) -> bool {
        let mut partial = StepData::new();
        partial.insert(question.to_string(), value.into());
        self.wizard.update_step_data(step_id, partial)
    }

    /// Toggle an interest on the direction step. Returns whether it is
    /// selected afterwards, or `None` for an area not in [`INTEREST_AREAS`].
    pub fn toggle_interest(&mut self, area: &str) -> Option<bool> {
        if !INTEREST_AREAS.contains(&area) {
            debug!(area, "ignoring unknown interest area");
            return None;
        }
        let selected = self.interests.toggle(area);
        let values = self
            .interests
            .values()
            .iter()
            .cloned()
            .map(Value::String)
            .collect();
        let mut partial = StepData::new();
        partial.insert("interests".to_string(), Value::Array(values));
        self.wizard.update_step_data(DIRECTION_STEP, partial);
        Some(selected)
    }

    pub fn next(&mut self) -> Navigation {
        let navigation = self.wizard.go_next();
        if navigation == Navigation::Completed {
            self.completed = true;
        }
        navigation
    }

    pub fn back(&mut self) -> Navigation {
        self.wizard.go_back()
    }

    pub fn jump_to(&mut self, step_id: &str) -> Navigation {
        self.wizard.jump_to(step_id)
    }

    pub fn summary(&self) -> OnboardingSummary {
        let data = self.wizard.state().accumulated_data();
        let text = |step: &str, key: &str| -> Option<String> {
            data.get(step)
                .and_then(|answers| answers.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        OnboardingSummary {
            role: text(ROLE_STEP, "role").and_then(|role| role.parse().ok()),
            name: text(PROFILE_STEP, "name"),
            company: text(PROFILE_STEP, "company"),
            interests: self.interests.values().to_vec(),
            completed: self.completed,
        }
    }
}
