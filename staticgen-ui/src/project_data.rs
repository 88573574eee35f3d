//! Decoding of the site's project data files

use crate::display_types::ProjectCardInput;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProjectDataError {
    #[error("Invalid project data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),
}

/// Parse a JSON array of project records.
///
/// Slugs must be unique since each one becomes a `/projects/<slug>` route.
pub fn parse_projects(json: &str) -> Result<Vec<ProjectCardInput>, ProjectDataError> {
    let projects: Vec<ProjectCardInput> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.slug.as_str()) {
            return Err(ProjectDataError::DuplicateSlug(project.slug.clone()));
        }

        let unavailable = project.stats.unavailable();
        if !unavailable.is_empty() {
            debug!(
                "Project {} has no numeric value for {:?}",
                project.slug, unavailable
            );
        }
    }

    info!("Loaded {} projects", projects.len());
    Ok(projects)
}

/// Look up a project by slug
pub fn find_project<'a>(
    projects: &'a [ProjectCardInput],
    slug: &str,
) -> Option<&'a ProjectCardInput> {
    projects.iter().find(|p| p.slug == slug)
}
