//! Mock framework for Storybook-like component development
//!
//! Provides:
//! - ControlRegistry: Typed control bag with URL sync
//! - Presets: Named state configurations for quick switching
//! - MockPanel: Auto-generated control panel around the rendered component

mod panel;
mod preset;
mod registry;

pub use panel::MockPanel;
pub use preset::Preset;
pub use registry::{ControlRegistry, ControlRegistryBuilder, ControlValue};
