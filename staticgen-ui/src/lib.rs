//! staticgen-ui - Project card components for the staticgen site
//!
//! Contains display types, site data decoding, and pure view components.
//! Hosts supply navigation and assets through props.

pub mod components;
pub mod display_types;
pub mod project_data;

pub use components::*;
pub use display_types::*;
pub use project_data::{find_project, parse_projects, ProjectDataError};
