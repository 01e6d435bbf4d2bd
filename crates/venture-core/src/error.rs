use thiserror::Error;

/// Wizard configuration errors, reported at construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("wizard requires at least one step")]
    NoSteps,
    #[error("step id must not be empty (step {index})")]
    EmptyStepId { index: usize },
    #[error("duplicate step id: {0}")]
    DuplicateStep(String),
}

/// Panel configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("panel minimum width must be positive")]
    ZeroMinWidth,
    #[error("panel minimum width {min} exceeds maximum width {max}")]
    InvertedBounds { min: u32, max: u32 },
    #[error("initial panel width {width} is outside {min}..={max}")]
    InitialWidthOutOfBounds { width: u32, min: u32, max: u32 },
}
