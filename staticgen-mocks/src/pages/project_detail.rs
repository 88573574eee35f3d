//! Project page - the card's navigation target

use super::navigate_to_path;
use crate::{demo_data, Route, NETLIFY_LOGO};
use dioxus::prelude::*;
use staticgen_ui::ProjectCard;
use tracing::warn;

#[component]
pub fn ProjectDetail(slug: String) -> Element {
    let Some(project) = demo_data::get_project(&slug) else {
        warn!("No project with slug {}", slug);
        return rsx! {
            div { class: "max-w-xl mx-auto p-8 text-center",
                p { class: "text-gray-500 mb-4", "Project not found" }
                Link { to: Route::Gallery {}, class: "text-blue-600 hover:underline", "Back to projects" }
            }
        };
    };

    rsx! {
        div { class: "max-w-xl mx-auto p-8",
            Link {
                to: Route::Gallery {},
                class: "text-sm text-gray-500 hover:underline",
                "← All projects"
            }
            div { class: "mt-4",
                ProjectCard {
                    project: project.clone(),
                    deploy_logo: NETLIFY_LOGO.to_string(),
                    on_navigate: move |path: String| navigate_to_path(path),
                }
            }
            dl { class: "mt-6 text-sm",
                dt { class: "font-semibold", "Repository" }
                dd { class: "mb-2",
                    a { href: "https://github.com/{project.repository_identifier}",
                        "{project.repository_identifier}"
                    }
                }
                if let Some(homepage) = &project.homepage {
                    dt { class: "font-semibold", "Homepage" }
                    dd {
                        a { href: "{homepage}", "{homepage}" }
                    }
                }
            }
        }
    }
}
