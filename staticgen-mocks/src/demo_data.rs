//! Demo data for the gallery
//!
//! Provides static fixture projects for rendering the cards without a site
//! build.

use staticgen_ui::{find_project, parse_projects, ProjectCardInput};
use std::sync::OnceLock;
use tracing::error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/projects.json");

static PROJECTS: OnceLock<Vec<ProjectCardInput>> = OnceLock::new();

/// All fixture projects, parsed on first use.
///
/// Bad fixture data is logged and leaves the gallery empty.
pub fn get_projects() -> &'static [ProjectCardInput] {
    PROJECTS.get_or_init(|| match parse_projects(FIXTURE_JSON) {
        Ok(projects) => projects,
        Err(e) => {
            error!("Failed to load fixture projects: {}", e);
            Vec::new()
        }
    })
}

pub fn get_project(slug: &str) -> Option<&'static ProjectCardInput> {
    find_project(get_projects(), slug)
}
