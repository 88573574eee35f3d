//! Project card components

pub mod icons;
pub mod project_card;
pub mod project_grid;
pub mod stat_badge;
pub mod stat_row;

pub use icons::{StatIcon, StatIconGlyph};
pub use project_card::{
    deploy_url, is_compact_title, metadata_rows, DeployButton, MetadataRow, ProjectCard,
    COMPACT_TITLE_THRESHOLD,
};
pub use project_grid::ProjectGrid;
pub use stat_badge::{format_delta, stat_display, DeltaTone, StatBadge, StatChange, StatDisplay};
pub use stat_row::StatRow;
