//! Component mocks with interactive controls

pub mod framework;
mod project_card;
pub mod url_state;

pub use project_card::{mock_project, MockCardSettings, ProjectCardMock};
