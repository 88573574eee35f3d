//! Single open-source statistic with its day-over-day change

use crate::components::icons::{StatIcon, StatIconGlyph};
use dioxus::prelude::*;
use tracing::trace;

/// Color treatment for a change value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaTone {
    Neutral,
    Positive,
    Negative,
}

impl DeltaTone {
    pub fn as_str(self) -> &'static str {
        match self {
            DeltaTone::Neutral => "neutral",
            DeltaTone::Positive => "positive",
            DeltaTone::Negative => "negative",
        }
    }

    fn class(self) -> &'static str {
        match self {
            DeltaTone::Neutral => "",
            DeltaTone::Positive => "text-[#31bb47]",
            DeltaTone::Negative => "text-[#c91b1b]",
        }
    }
}

/// Change shown under a stat value
#[derive(Clone, Debug, PartialEq)]
pub struct StatChange {
    pub delta: i64,
    pub text: String,
    pub tooltip: String,
    pub tone: DeltaTone,
}

/// What a stat badge shows
#[derive(Clone, Debug, PartialEq)]
pub enum StatDisplay {
    /// Value missing or not a number: disabled badge reading "N/A"
    Unavailable,
    Available {
        value: i64,
        /// `None` when the snapshot is less than a day old
        change: Option<StatChange>,
    },
}

impl StatDisplay {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StatDisplay::Unavailable)
    }

    pub fn tone(&self) -> DeltaTone {
        match self {
            StatDisplay::Available {
                change: Some(change),
                ..
            } => change.tone,
            _ => DeltaTone::Neutral,
        }
    }
}

/// Format a delta with an explicit sign. Zero reads as "--".
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else if delta == 0 {
        "--".to_string()
    } else {
        delta.to_string()
    }
}

/// Compute what a stat badge displays.
///
/// The tone is derived from the numeric delta, never from the formatted text.
pub fn stat_display(
    value: Option<i64>,
    previous: i64,
    label: &str,
    data_age_in_days: f64,
    indicate_color: bool,
) -> StatDisplay {
    let Some(value) = value else {
        return StatDisplay::Unavailable;
    };

    if data_age_in_days < 1.0 {
        return StatDisplay::Available {
            value,
            change: None,
        };
    }

    let delta = value.saturating_sub(previous);
    let tone = if !indicate_color {
        DeltaTone::Neutral
    } else if delta > 0 {
        DeltaTone::Positive
    } else if delta < 0 {
        DeltaTone::Negative
    } else {
        DeltaTone::Neutral
    };

    StatDisplay::Available {
        value,
        change: Some(StatChange {
            delta,
            text: format_delta(delta),
            tooltip: format!("{} in the last {} days", label, data_age_in_days),
            tone,
        }),
    }
}

/// One statistic: icon, value or N/A, and the change since the previous snapshot
#[component]
pub fn StatBadge(
    icon: StatIcon,
    label: &'static str,
    value: Option<i64>,
    #[props(default)] previous: i64,
    data_age_in_days: f64,
    #[props(default)] indicate_color: bool,
) -> Element {
    let display = stat_display(value, previous, label, data_age_in_days, indicate_color);

    let state_class = if display.is_unavailable() {
        trace!("{} unavailable, rendering N/A", label);
        "disabled text-[#bbb]"
    } else {
        "text-[#313d3e]"
    };

    rsx! {
        div {
            class: "w-1/4 text-center text-[15px] {state_class}",
            title: label,
            "data-testid": "stat-badge",
            span { class: "inline-block w-[18px] h-[18px]",
                StatIconGlyph { icon, class: "w-[18px] h-[18px]" }
            }
            if let StatDisplay::Available { value, change } = display {
                div {
                    strong { "{value}" }
                    if let Some(change) = change {
                        div {
                            class: format!("text-sm {}", change.tone.class()),
                            title: change.tooltip.clone(),
                            "data-testid": "stat-change",
                            "data-tone": change.tone.as_str(),
                            "{change.text}"
                        }
                    }
                }
            } else {
                div { "N/A" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(display: &StatDisplay) -> Option<&StatChange> {
        match display {
            StatDisplay::Available { change, .. } => change.as_ref(),
            StatDisplay::Unavailable => None,
        }
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(20), "+20");
        assert_eq!(format_delta(0), "--");
        assert_eq!(format_delta(-3), "-3");
    }

    #[test]
    fn test_missing_value_is_unavailable() {
        for age in [0.0, 0.5, 1.0, 30.0] {
            let display = stat_display(None, 12, "GitHub stars", age, true);
            assert_eq!(display, StatDisplay::Unavailable);
            assert_eq!(display.tone(), DeltaTone::Neutral);
        }
    }

    #[test]
    fn test_fresh_snapshot_hides_change() {
        let display = stat_display(Some(120), 100, "GitHub stars", 0.5, true);
        assert_eq!(
            display,
            StatDisplay::Available {
                value: 120,
                change: None
            }
        );
    }

    #[test]
    fn test_one_day_old_snapshot_shows_change() {
        let display = stat_display(Some(120), 100, "GitHub stars", 1.0, true);
        assert_eq!(change(&display).map(|c| c.text.as_str()), Some("+20"));
    }

    #[test]
    fn test_change_tooltip() {
        let display = stat_display(Some(5), 5, "GitHub open issues", 2.0, false);
        assert_eq!(
            change(&display).map(|c| c.tooltip.as_str()),
            Some("GitHub open issues in the last 2 days")
        );

        let display = stat_display(Some(5), 5, "GitHub forks", 1.5, false);
        assert_eq!(
            change(&display).map(|c| c.tooltip.as_str()),
            Some("GitHub forks in the last 1.5 days")
        );
    }

    #[test]
    fn test_tone_follows_numeric_delta() {
        assert_eq!(
            stat_display(Some(10), 4, "x", 2.0, true).tone(),
            DeltaTone::Positive
        );
        assert_eq!(
            stat_display(Some(4), 10, "x", 2.0, true).tone(),
            DeltaTone::Negative
        );
        // "--" must not be misread as a sign
        assert_eq!(
            stat_display(Some(4), 4, "x", 2.0, true).tone(),
            DeltaTone::Neutral
        );
    }

    #[test]
    fn test_uncolored_badge_stays_neutral() {
        for previous in [0, 5, 100] {
            let display = stat_display(Some(5), previous, "GitHub open issues", 7.0, false);
            assert_eq!(display.tone(), DeltaTone::Neutral);
        }
    }

    #[test]
    fn test_negative_change_text() {
        let display = stat_display(Some(90), 100, "GitHub stars", 3.0, true);
        let change = change(&display).unwrap();
        assert_eq!(change.delta, -10);
        assert_eq!(change.text, "-10");
    }
}
