//! Stat icons: GitHub Octicons plus a Twitter glyph
//!
//! All glyphs use fill="currentColor" so they inherit text color from the
//! surrounding badge, including its disabled gray.

use crate::display_types::StatKind;
use dioxus::prelude::*;

/// Icon identifier understood by [`StatIconGlyph`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Star,
    IssueOpened,
    RepoForked,
    Twitter,
}

impl StatIcon {
    /// Octicon name, or the social network for the Twitter glyph
    pub fn name(self) -> &'static str {
        match self {
            StatIcon::Star => "star",
            StatIcon::IssueOpened => "issue-opened",
            StatIcon::RepoForked => "repo-forked",
            StatIcon::Twitter => "twitter",
        }
    }
}

impl From<StatKind> for StatIcon {
    fn from(kind: StatKind) -> Self {
        match kind {
            StatKind::Stars => StatIcon::Star,
            StatKind::OpenIssues => StatIcon::IssueOpened,
            StatKind::Forks => StatIcon::RepoForked,
            StatKind::Followers => StatIcon::Twitter,
        }
    }
}

/// Render a stat icon by identifier
#[component]
pub fn StatIconGlyph(icon: StatIcon, #[props(default = "w-4 h-4")] class: &'static str) -> Element {
    match icon {
        StatIcon::Star => rsx! {
            svg {
                class: "{class}",
                "data-icon": icon.name(),
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 16 16",
                fill: "currentColor",
                path { d: "M8 .25a.75.75 0 0 1 .673.418l1.882 3.815 4.21.612a.75.75 0 0 1 .416 1.279l-3.046 2.97.719 4.192a.751.751 0 0 1-1.088.791L8 12.347l-3.766 1.98a.75.75 0 0 1-1.088-.79l.72-4.194L.818 6.374a.75.75 0 0 1 .416-1.28l4.21-.611L7.327.668A.75.75 0 0 1 8 .25Z" }
            }
        },
        StatIcon::IssueOpened => rsx! {
            svg {
                class: "{class}",
                "data-icon": icon.name(),
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 16 16",
                fill: "currentColor",
                path { d: "M8 9.5a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3Z" }
                path { d: "M8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0ZM1.5 8a6.5 6.5 0 1 0 13 0 6.5 6.5 0 0 0-13 0Z" }
            }
        },
        StatIcon::RepoForked => rsx! {
            svg {
                class: "{class}",
                "data-icon": icon.name(),
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 16 16",
                fill: "currentColor",
                path { d: "M5 5.372v.878c0 .414.336.75.75.75h4.5a.75.75 0 0 0 .75-.75v-.878a2.25 2.25 0 1 1 1.5 0v.878a2.25 2.25 0 0 1-2.25 2.25h-1.5v2.128a2.251 2.251 0 1 1-1.5 0V8.5h-1.5A2.25 2.25 0 0 1 3.5 6.25v-.878a2.25 2.25 0 1 1 1.5 0ZM5 3.25a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Zm6.75.75a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm-3 8.75a.75.75 0 1 0-1.5 0 .75.75 0 0 0 1.5 0Z" }
            }
        },
        // Slightly smaller than the octicons so it sits on the same baseline
        StatIcon::Twitter => rsx! {
            svg {
                class: "{class} !w-4 !h-4",
                "data-icon": icon.name(),
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: "M23.953 4.57a10 10 0 0 1-2.825.775 4.958 4.958 0 0 0 2.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 0 0-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 0 0-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 0 1-2.228-.616v.06a4.923 4.923 0 0 0 3.946 4.827 4.996 4.996 0 0 1-2.212.085 4.936 4.936 0 0 0 4.604 3.417 9.867 9.867 0 0 1-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 0 0 7.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0 0 24 4.59z" }
            }
        },
    }
}
