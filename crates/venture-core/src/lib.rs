//! View-layer state for the venture platform.
//!
//! Three mechanisms carry every screen:
//!
//! - [`collection`]: filter, sort and select over a read-only record source
//! - [`wizard`]: ordered steps with accumulated answers
//! - [`panel`]: a docked side panel resized by dragging its edge
//!
//! [`screens`] builds the concrete screens on top of them.

#![deny(unsafe_code)]

pub mod collection;
pub mod error;
pub mod format;
pub mod navigation;
pub mod panel;
pub mod screens;
pub mod wizard;

pub use crate::error::{PanelError, WizardError};
pub use crate::navigation::{DealTab, View};
pub use crate::panel::{
    DockedPanel, DragSession, DragSurface, PanelConfig, PanelState, TracingSurface,
};
pub use crate::screens::Workspace;
pub use crate::wizard::{
    AccumulatedData, Navigation, StepData, StepDescriptor, WizardController, WizardState,
};
