//! Gallery app pages

mod gallery;
mod mock_project_card;
mod project_detail;

pub use gallery::Gallery;
pub use mock_project_card::MockProjectCard;
pub use project_detail::ProjectDetail;

use crate::Route;
use dioxus::prelude::*;
use tracing::warn;

/// Push a card's navigation path through the router
pub(crate) fn navigate_to_path(path: String) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(_) => warn!("Card navigated to unroutable path {}", path),
    }
}
