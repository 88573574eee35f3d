//! Project card component - pure view, navigation via href or callback

use crate::components::stat_row::StatRow;
use crate::display_types::ProjectCardInput;
use dioxus::prelude::*;

/// Titles longer than this many characters use the compact style
pub const COMPACT_TITLE_THRESHOLD: usize = 14;

/// One "Label: values" line under the description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: &'static str,
    pub value: String,
}

/// Whether a title gets the compact style.
///
/// Length is counted in Unicode scalar values, not UTF-16 code units, so a
/// character outside the BMP (most emoji) counts once rather than twice.
/// "abcdefghijklmn" (14) stays normal, "abcdefghijklmno" (15) is compact.
pub fn is_compact_title(title: &str) -> bool {
    title.chars().count() > COMPACT_TITLE_THRESHOLD
}

/// Netlify one-click deploy link for a GitHub `owner/repo`
pub fn deploy_url(repository: &str) -> String {
    format!(
        "https://app.netlify.com/start/deploy?repository=https://github.com/{}",
        repository
    )
}

/// Metadata rows for the sequences that are present, in display order.
///
/// Only a missing sequence hides its row. A present but empty one still
/// renders, with an empty value.
pub fn metadata_rows(project: &ProjectCardInput) -> Vec<MetadataRow> {
    [
        ("Languages", &project.languages),
        ("Templates", &project.templates),
        ("License", &project.license),
    ]
    .into_iter()
    .filter_map(|(label, values)| {
        values.as_ref().map(|values| MetadataRow {
            label,
            value: values.join(", "),
        })
    })
    .collect()
}

/// Card for a single project
///
/// The body is a link to `/projects/<slug>`. With `on_navigate` set the click
/// is intercepted and the handler gets the path instead, so hosts with a
/// client-side router can push the route themselves. `deploy_logo` is the
/// resolved URL of the deploy button's logo from the host's asset pipeline.
#[component]
pub fn ProjectCard(
    project: ProjectCardInput,
    deploy_logo: String,
    #[props(default)] on_navigate: Option<EventHandler<String>>,
) -> Element {
    let path = project.path();
    let title_class = if is_compact_title(&project.title) {
        "title title-small text-2xl pt-[7px] pb-[10px]"
    } else {
        "title text-3xl"
    };
    let rows = metadata_rows(&project);

    rsx! {
        div {
            class: "card bg-white rounded-lg shadow p-[18px]",
            "data-testid": "project-card",
            a {
                href: "{path}",
                class: "block text-inherit no-underline",
                onclick: {
                    let path = path.clone();
                    move |evt: MouseEvent| {
                        if let Some(handler) = on_navigate {
                            evt.prevent_default();
                            handler.call(path.clone());
                        }
                    }
                },
                h4 { class: "{title_class}", "{project.title}" }
                StatRow {
                    stats: project.stats.clone(),
                    data_age_in_days: project.data_age_in_days,
                }
                div { class: "description mt-4", "{project.description}" }
                for row in rows {
                    div { key: "{row.label}", class: "mt-2", "data-testid": "metadata-row",
                        h6 { class: "inline text-sm font-semibold mr-1", "{row.label}:" }
                        p { class: "type mt-0", "{row.value}" }
                    }
                }
            }
            if let Some(repository) = project.starter_template_repository.clone() {
                DeployButton { repository, logo: deploy_logo.clone() }
            }
        }
    }
}

/// "Deploy to Netlify" button for a starter template repository
#[component]
pub fn DeployButton(repository: String, logo: String) -> Element {
    rsx! {
        a {
            class: "flex justify-center items-center -mx-[18px] -mb-[18px] mt-5 p-[11px] bg-[#fcfcfc] border-t border-[#eee] rounded-b-lg text-[17px] text-[#374344]",
            href: deploy_url(&repository),
            "data-testid": "deploy-button",
            img { class: "w-7 mr-2", src: "{logo}", alt: "" }
            "Deploy to Netlify"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_title_threshold() {
        assert!(!is_compact_title("Demo"));
        assert!(!is_compact_title("abcdefghijklmn"));
        assert!(is_compact_title("abcdefghijklmno"));
    }

    #[test]
    fn test_compact_title_counts_characters() {
        // 14 characters, more than 14 bytes
        assert!(!is_compact_title("Środowisko ćmy"));
    }

    #[test]
    fn test_compact_title_counts_emoji_once() {
        // 13 letters plus one emoji: 14 scalar values, 15 UTF-16 units
        let title = "abcdefghijklm\u{1F680}";
        assert_eq!(title.encode_utf16().count(), 15);
        assert!(!is_compact_title(title));
    }

    #[test]
    fn test_deploy_url() {
        assert_eq!(
            deploy_url("acme/starter"),
            "https://app.netlify.com/start/deploy?repository=https://github.com/acme/starter"
        );
    }

    #[test]
    fn test_metadata_rows_order_and_join() {
        let project = ProjectCardInput {
            languages: Some(vec!["Go".into(), "Rust".into()]),
            templates: Some(vec!["Handlebars".into()]),
            license: Some(vec!["MIT".into(), "Apache-2.0".into()]),
            ..Default::default()
        };
        assert_eq!(
            metadata_rows(&project),
            vec![
                MetadataRow {
                    label: "Languages",
                    value: "Go, Rust".into()
                },
                MetadataRow {
                    label: "Templates",
                    value: "Handlebars".into()
                },
                MetadataRow {
                    label: "License",
                    value: "MIT, Apache-2.0".into()
                },
            ]
        );
    }

    #[test]
    fn test_metadata_rows_skip_missing() {
        let project = ProjectCardInput {
            license: Some(vec!["MIT".into()]),
            ..Default::default()
        };
        let rows = metadata_rows(&project);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "License");
    }

    #[test]
    fn test_empty_metadata_sequence_still_renders() {
        let project = ProjectCardInput {
            templates: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(
            metadata_rows(&project),
            vec![MetadataRow {
                label: "Templates",
                value: String::new()
            }]
        );
    }
}
