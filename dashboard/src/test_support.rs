//! Test-only helpers for constructing configuration values.

use crate::core::types::{NavigationEntry, StatusMappingEntry, StyleVariant};
use crate::io::config::DashboardConfig;

/// Create a navigation entry.
pub fn nav_entry(label: &str, target_path: &str) -> NavigationEntry {
    NavigationEntry::new(label, target_path)
}

/// Create a status mapping row.
pub fn status_entry(
    match_value: &str,
    display_label: &str,
    variant: StyleVariant,
) -> StatusMappingEntry {
    StatusMappingEntry::new(match_value, display_label, variant)
}

/// Default config with explicit navigation entries.
pub fn config_with_navigation(entries: Vec<NavigationEntry>) -> DashboardConfig {
    DashboardConfig {
        navigation: entries,
        ..DashboardConfig::default()
    }
}
