//! Two-step wizard: data entry, then preview and commit.
//!
//! The intent (create or update) rides along with the step so that a preview
//! without an intent cannot be represented.

/// What committing the preview will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Update,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Create => "submit",
            Intent::Update => "update",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Step 1. `intent` is set once a record was loaded for update.
    DataEntry { intent: Option<Intent> },
    /// Step 2.
    Preview(Intent),
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::DataEntry { intent: None }
    }
}

impl WizardState {
    /// Moves to the preview. Entering data without loading a record means create.
    pub fn proceed_to_preview(&mut self) {
        *self = match *self {
            WizardState::DataEntry { intent } => {
                WizardState::Preview(intent.unwrap_or(Intent::Create))
            }
            preview @ WizardState::Preview(_) => preview,
        };
    }

    /// A search hit switches the intent to update without moving the step.
    pub fn loaded_for_update(&mut self) {
        *self = match *self {
            WizardState::DataEntry { .. } => WizardState::DataEntry {
                intent: Some(Intent::Update),
            },
            WizardState::Preview(_) => WizardState::Preview(Intent::Update),
        };
    }

    pub fn reset(&mut self) {
        *self = WizardState::default();
    }

    pub fn step(&self) -> u8 {
        match self {
            WizardState::DataEntry { .. } => 1,
            WizardState::Preview(_) => 2,
        }
    }

    pub fn intent(&self) -> Option<Intent> {
        match self {
            WizardState::DataEntry { intent } => *intent,
            WizardState::Preview(intent) => Some(*intent),
        }
    }

    /// `""`, `"submit"` or `"update"`.
    pub fn mode(&self) -> &'static str {
        self.intent().map_or("", Intent::as_str)
    }
}
