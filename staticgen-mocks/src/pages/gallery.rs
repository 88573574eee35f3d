//! Gallery page - every fixture project as a card

use super::navigate_to_path;
use crate::{demo_data, Route, NETLIFY_LOGO};
use dioxus::prelude::*;
use staticgen_ui::ProjectGrid;

#[component]
pub fn Gallery() -> Element {
    let projects = demo_data::get_projects().to_vec();

    rsx! {
        div { class: "max-w-6xl mx-auto p-8",
            div { class: "flex items-baseline justify-between mb-6",
                h1 { class: "text-2xl font-bold", "Projects" }
                Link {
                    to: Route::MockProjectCard {
                        state: None,
                    },
                    class: "text-sm text-blue-600 hover:underline",
                    "Project card mock →"
                }
            }
            ProjectGrid {
                projects,
                deploy_logo: NETLIFY_LOGO.to_string(),
                on_navigate: move |path: String| navigate_to_path(path),
            }
        }
    }
}
