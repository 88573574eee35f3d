//! Row of the four community stats

use crate::components::icons::StatIcon;
use crate::components::stat_badge::StatBadge;
use crate::display_types::{StatKind, StatSnapshot};
use dioxus::prelude::*;

/// Stars, open issues, forks and followers, always in that order
#[component]
pub fn StatRow(stats: StatSnapshot, data_age_in_days: f64) -> Element {
    rsx! {
        div {
            class: "flex -mx-[18px] mt-4 p-[18px] bg-[#fcfcfc] border-y border-[#eee]",
            "data-testid": "stat-row",
            for kind in StatKind::ALL {
                StatBadge {
                    key: "{kind:?}",
                    icon: StatIcon::from(kind),
                    label: kind.label(),
                    value: stats.pair(kind).0,
                    previous: stats.pair(kind).1,
                    data_age_in_days,
                    indicate_color: kind.indicates_color(),
                }
            }
        }
    }
}
