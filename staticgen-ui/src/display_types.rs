//! Display types for the project card
//!
//! Plain, immutable records handed to the views. Field defaults live here
//! rather than at call sites, and the serde attributes follow the camelCase
//! keys used by the site's project data files.

use serde::{Deserialize, Deserializer};

/// Everything the project card needs to render one project
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCardInput {
    pub title: String,
    /// GitHub `owner/repo`
    #[serde(rename = "repo", default)]
    pub repository_identifier: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub templates: Option<Vec<String>>,
    #[serde(rename = "language", default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub license: Option<Vec<String>>,
    /// Repository handed to the deploy service. `None` hides the deploy action.
    #[serde(rename = "starterTemplateRepo", default)]
    pub starter_template_repository: Option<String>,
    #[serde(default)]
    pub description: String,
    pub slug: String,
    /// Age of the stats snapshot. Deltas are hidden below one day.
    #[serde(default, deserialize_with = "lenient_age")]
    pub data_age_in_days: f64,
    #[serde(flatten)]
    pub stats: StatSnapshot,
}

impl ProjectCardInput {
    /// Navigation target for the card
    pub fn path(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

/// Current and previous values of the tracked community metrics
///
/// A `None` current value means the metric was missing or not a number in the
/// source data; it renders as N/A no matter what the previous value is.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSnapshot {
    #[serde(default, deserialize_with = "lenient_count")]
    pub stars: Option<i64>,
    #[serde(default, deserialize_with = "lenient_previous")]
    pub stars_previous: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub issues: Option<i64>,
    #[serde(default, deserialize_with = "lenient_previous")]
    pub issues_previous: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub forks: Option<i64>,
    #[serde(default, deserialize_with = "lenient_previous")]
    pub forks_previous: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub followers: Option<i64>,
    #[serde(default, deserialize_with = "lenient_previous")]
    pub followers_previous: i64,
}

impl StatSnapshot {
    /// `(current, previous)` for one metric
    pub fn pair(&self, kind: StatKind) -> (Option<i64>, i64) {
        match kind {
            StatKind::Stars => (self.stars, self.stars_previous),
            StatKind::OpenIssues => (self.issues, self.issues_previous),
            StatKind::Forks => (self.forks, self.forks_previous),
            StatKind::Followers => (self.followers, self.followers_previous),
        }
    }

    /// Metrics whose current value is missing
    pub fn unavailable(&self) -> Vec<StatKind> {
        StatKind::ALL
            .into_iter()
            .filter(|kind| self.pair(*kind).0.is_none())
            .collect()
    }
}

/// One of the four metrics shown in the stat row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Stars,
    OpenIssues,
    Forks,
    Followers,
}

impl StatKind {
    /// Display order of the stat row
    pub const ALL: [StatKind; 4] = [
        StatKind::Stars,
        StatKind::OpenIssues,
        StatKind::Forks,
        StatKind::Followers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Stars => "GitHub stars",
            StatKind::OpenIssues => "GitHub open issues",
            StatKind::Forks => "GitHub forks",
            StatKind::Followers => "Twitter followers",
        }
    }

    /// Whether the delta is colored by sign. More open issues is not
    /// clearly good or bad, so issues stay neutral.
    pub fn indicates_color(self) -> bool {
        !matches!(self, StatKind::OpenIssues)
    }
}

/// Integral value of a JSON number, rounding fractions. Non-numbers give `None`.
fn json_count(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        _ => None,
    }
}

/// Anything that isn't a JSON number counts as missing.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(json_count(&value))
}

/// Previous values fall back to 0 when they aren't a JSON number.
fn lenient_previous<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(json_count(&value).unwrap_or(0))
}

/// A non-numeric age reads as 0, which hides the deltas.
fn lenient_age<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_uses_slug() {
        let project = ProjectCardInput {
            slug: "gatsby".to_string(),
            ..Default::default()
        };
        assert_eq!(project.path(), "/projects/gatsby");
    }

    #[test]
    fn test_pair_defaults_previous_to_zero() {
        let stats = StatSnapshot {
            followers: Some(50),
            ..Default::default()
        };
        assert_eq!(stats.pair(StatKind::Followers), (Some(50), 0));
        assert_eq!(stats.pair(StatKind::Stars), (None, 0));
    }

    #[test]
    fn test_only_issues_skip_color() {
        let colored: Vec<_> = StatKind::ALL
            .into_iter()
            .filter(|k| k.indicates_color())
            .collect();
        assert_eq!(
            colored,
            vec![StatKind::Stars, StatKind::Forks, StatKind::Followers]
        );
    }

    #[test]
    fn test_unavailable_lists_missing_metrics() {
        let stats = StatSnapshot {
            stars: Some(1),
            forks: Some(2),
            ..Default::default()
        };
        assert_eq!(
            stats.unavailable(),
            vec![StatKind::OpenIssues, StatKind::Followers]
        );
    }
}
