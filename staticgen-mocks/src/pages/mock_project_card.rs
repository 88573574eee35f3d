//! Mock page with URL state persistence

use crate::mocks::ProjectCardMock;
use dioxus::prelude::*;

#[component]
pub fn MockProjectCard(state: Option<String>) -> Element {
    rsx! {
        ProjectCardMock { initial_state: state }
    }
}
