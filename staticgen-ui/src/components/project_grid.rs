//! Grid of project cards

use crate::components::project_card::ProjectCard;
use crate::display_types::ProjectCardInput;
use dioxus::prelude::*;

/// Renders one card per project, in the order given
#[component]
pub fn ProjectGrid(
    projects: Vec<ProjectCardInput>,
    deploy_logo: String,
    #[props(default)] on_navigate: Option<EventHandler<String>>,
) -> Element {
    if projects.is_empty() {
        return rsx! {
            div { class: "py-16 text-center text-gray-500", "data-testid": "project-grid-empty",
                "No projects to show"
            }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            "data-testid": "project-grid",
            for project in projects {
                ProjectCard {
                    key: "{project.slug}",
                    project: project.clone(),
                    deploy_logo: deploy_logo.clone(),
                    on_navigate,
                }
            }
        }
    }
}
