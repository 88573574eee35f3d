//! staticgen mocks - Web gallery for the project card
//!
//! A minimal web app that renders the card with fixture data, plus an
//! interactive mock page for exercising every render path.

pub mod demo_data;
pub mod mocks;
pub mod pages;

use dioxus::prelude::*;
use pages::{Gallery, MockProjectCard, ProjectDetail};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const NETLIFY_LOGO: Asset = asset!("/assets/netlify-logo.svg");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/projects/:slug")]
    ProjectDetail { slug: String },
    // Mock pages with controls
    #[route("/mock/project-card?:state")]
    MockProjectCard { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
