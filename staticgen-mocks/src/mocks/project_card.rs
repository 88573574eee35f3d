//! Project card mock component

use super::framework::{ControlRegistry, ControlRegistryBuilder, MockPanel, Preset};
use crate::{Route, NETLIFY_LOGO};
use dioxus::prelude::*;
use staticgen_ui::{ProjectCard, ProjectCardInput, StatSnapshot};

#[component]
pub fn ProjectCardMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "title",
            "Title",
            "short",
            vec![("short", "Short"), ("boundary", "14 chars"), ("long", "Long")],
        )
        .int_control("data_age", "Data age (days)", 2, 0, 30)
        .doc("Deltas are hidden when the snapshot is less than a day old")
        .int_control("stars_delta", "Star change", 20, -500, 500)
        .int_control("issues_delta", "Issue change", 0, -50, 50)
        .doc("Open issues are never colored")
        .bool_control("stats_available", "Stats available", true)
        .bool_control("languages", "Languages", true)
        .bool_control("templates", "Templates", false)
        .bool_control("license", "License", false)
        .bool_control("empty_license", "Empty license list", false)
        .doc("A present but empty list still renders its row")
        .bool_control("deploy", "Deploy button", false)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Fresh Snapshot").set_int("data_age", 0),
            Preset::new("Long Title").set_string("title", "long"),
            Preset::new("Stats Unavailable").set_bool("stats_available", false),
            Preset::new("Losing Stars")
                .set_int("stars_delta", -12)
                .set_int("issues_delta", 7),
            Preset::new("Starter Template")
                .set_bool("templates", true)
                .set_bool("license", true)
                .set_bool("deploy", true),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockProjectCard { state });

    let project = mock_project(&registry);

    rsx! {
        MockPanel { title: "Project Card", registry,
            div { class: "bg-gray-100 rounded-lg p-8",
                div { class: "max-w-sm mx-auto text-gray-900",
                    ProjectCard { project, deploy_logo: NETLIFY_LOGO.to_string() }
                }
            }
        }
    }
}

/// Control values that shape the mock card
#[derive(Clone, Debug, PartialEq)]
pub struct MockCardSettings {
    pub title: String,
    pub data_age: i32,
    pub stars_delta: i32,
    pub issues_delta: i32,
    pub stats_available: bool,
    pub languages: bool,
    pub templates: bool,
    pub license: bool,
    pub empty_license: bool,
    pub deploy: bool,
}

impl MockCardSettings {
    /// Read the current control values (subscribes to every control)
    pub fn from_registry(registry: &ControlRegistry) -> Self {
        Self {
            title: registry.get_string("title"),
            data_age: registry.get_int("data_age"),
            stars_delta: registry.get_int("stars_delta"),
            issues_delta: registry.get_int("issues_delta"),
            stats_available: registry.get_bool("stats_available"),
            languages: registry.get_bool("languages"),
            templates: registry.get_bool("templates"),
            license: registry.get_bool("license"),
            empty_license: registry.get_bool("empty_license"),
            deploy: registry.get_bool("deploy"),
        }
    }

    pub fn to_project(&self) -> ProjectCardInput {
        let title = match self.title.as_str() {
            "boundary" => "Fourteen Chars",
            "long" => "Docusaurus Classic",
            _ => "Demo",
        };

        // Current values stay fixed; the deltas move the previous values
        let stats = if self.stats_available {
            StatSnapshot {
                stars: Some(120),
                stars_previous: 120 - i64::from(self.stars_delta),
                issues: Some(5),
                issues_previous: 5 - i64::from(self.issues_delta),
                forks: Some(10),
                forks_previous: 8,
                followers: Some(50),
                followers_previous: 0,
            }
        } else {
            StatSnapshot {
                stars_previous: 100,
                issues_previous: 5,
                ..Default::default()
            }
        };

        let license = if self.empty_license {
            Some(Vec::new())
        } else if self.license {
            Some(vec!["MIT".to_string()])
        } else {
            None
        };

        ProjectCardInput {
            title: title.to_string(),
            repository_identifier: "acme/demo".to_string(),
            homepage: Some("https://demo.example.com".to_string()),
            templates: self
                .templates
                .then(|| vec!["React".to_string(), "Markdown".to_string()]),
            languages: self
                .languages
                .then(|| vec!["Go".to_string(), "Rust".to_string()]),
            license,
            starter_template_repository: self.deploy.then(|| "acme/starter".to_string()),
            description: "A demo project.".to_string(),
            slug: "demo".to_string(),
            data_age_in_days: f64::from(self.data_age),
            stats,
        }
    }
}

/// Build the card input described by the current control values
pub fn mock_project(registry: &ControlRegistry) -> ProjectCardInput {
    MockCardSettings::from_registry(registry).to_project()
}

#[cfg(test)]
mod tests {
    use super::*;
    use staticgen_ui::{stat_display, StatDisplay, StatKind};

    fn defaults() -> MockCardSettings {
        MockCardSettings {
            title: "short".to_string(),
            data_age: 2,
            stars_delta: 20,
            issues_delta: 0,
            stats_available: true,
            languages: true,
            templates: false,
            license: false,
            empty_license: false,
            deploy: false,
        }
    }

    #[test]
    fn test_stars_delta_sets_previous() {
        let project = defaults().to_project();
        assert_eq!(project.stats.stars, Some(120));
        assert_eq!(project.stats.stars_previous, 100);

        let project = MockCardSettings {
            stars_delta: -12,
            ..defaults()
        }
        .to_project();
        assert_eq!(project.stats.stars_previous, 132);

        let (value, previous) = project.stats.pair(StatKind::Stars);
        let display = stat_display(value, previous, "GitHub stars", 2.0, true);
        match display {
            StatDisplay::Available {
                change: Some(change),
                ..
            } => assert_eq!(change.text, "-12"),
            other => panic!("expected a change, got {:?}", other),
        }
    }

    #[test]
    fn test_stats_unavailable() {
        let project = MockCardSettings {
            stats_available: false,
            ..defaults()
        }
        .to_project();
        assert_eq!(project.stats.unavailable(), StatKind::ALL.to_vec());
    }

    #[test]
    fn test_title_variants() {
        let title = |t: &str| {
            MockCardSettings {
                title: t.to_string(),
                ..defaults()
            }
            .to_project()
            .title
        };
        assert_eq!(title("short"), "Demo");
        assert_eq!(title("boundary").chars().count(), 14);
        assert_eq!(title("long"), "Docusaurus Classic");
        assert_eq!(title("unknown"), "Demo");
    }

    #[test]
    fn test_empty_license_wins_over_license() {
        let project = MockCardSettings {
            license: true,
            empty_license: true,
            ..defaults()
        }
        .to_project();
        assert_eq!(project.license, Some(Vec::new()));
    }

    #[test]
    fn test_deploy_toggle() {
        assert_eq!(defaults().to_project().starter_template_repository, None);
        let project = MockCardSettings {
            deploy: true,
            ..defaults()
        }
        .to_project();
        assert_eq!(
            project.starter_template_repository.as_deref(),
            Some("acme/starter")
        );
    }
}
