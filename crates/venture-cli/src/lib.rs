//! CLI library components for the venture platform.

pub mod logging;
pub mod panel_script;
pub mod render;
