//! Dashboard configuration loaded from a TOML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::{NavigationEntry, StatusMappingEntry, StyleVariant};
use crate::nav::{default_navigation, default_status_table};

/// Dashboard configuration (TOML).
///
/// Read once at startup and shared read-only afterwards. Missing fields
/// default to the built-in Acme dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    pub brand: BrandConfig,

    /// Side navigation entries, rendered in declaration order.
    pub navigation: Vec<NavigationEntry>,

    /// Status mapping table, scanned first-match-wins.
    pub statuses: Vec<StatusMappingEntry>,

    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Acme Inc".to_string(),
            tagline: "Dashboard".to_string(),
        }
    }
}

/// Concrete class fragments for the abstract variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Classes every navigation link carries.
    pub link_base: String,
    /// Classes added to the active navigation link.
    pub link_active: String,
    /// Classes every status badge carries.
    pub badge_base: String,
    pub neutral: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            link_base: "block p-3 rounded-md hover:bg-blue-50 hover:text-blue-600 text-gray-700"
                .to_string(),
            link_active: "bg-blue-100 text-blue-600".to_string(),
            badge_base: "inline-flex items-center rounded-full px-2 py-1 text-sm".to_string(),
            neutral: "bg-gray-100 text-gray-500".to_string(),
            success: "bg-green-500 text-white".to_string(),
            warning: "bg-yellow-100 text-yellow-700".to_string(),
            danger: "bg-red-500 text-white".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Class fragment for a badge variant.
    pub fn variant_classes(&self, variant: StyleVariant) -> &str {
        match variant {
            StyleVariant::Neutral => &self.neutral,
            StyleVariant::Success => &self.success,
            StyleVariant::Warning => &self.warning,
            StyleVariant::Danger => &self.danger,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            navigation: default_navigation(),
            statuses: default_status_table(),
            theme: ThemeConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.navigation.is_empty() {
            return Err(anyhow!("navigation must list at least one entry"));
        }
        for (idx, entry) in self.navigation.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(anyhow!("navigation[{}].label must be non-empty", idx));
            }
            if !entry.target_path.starts_with('/') {
                return Err(anyhow!(
                    "navigation[{}].target_path must be an absolute path (got '{}')",
                    idx,
                    entry.target_path
                ));
            }
        }
        for (idx, entry) in self.statuses.iter().enumerate() {
            if entry.match_value.is_empty() {
                return Err(anyhow!("statuses[{}].match_value must be non-empty", idx));
            }
            if entry.display_label.trim().is_empty() {
                return Err(anyhow!("statuses[{}].display_label must be non-empty", idx));
            }
        }
        Ok(())
    }

    /// Describe entries that are accepted but probably unintended.
    ///
    /// Duplicate target paths make several links active at once; duplicate
    /// match values are shadowed by the first row.
    pub fn duplicate_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut seen_paths = HashSet::new();
        for entry in &self.navigation {
            if !seen_paths.insert(entry.target_path.as_str()) {
                warnings.push(format!(
                    "navigation entry '{}' repeats target_path '{}'",
                    entry.label, entry.target_path
                ));
            }
        }

        let mut seen_values = HashSet::new();
        for entry in &self.statuses {
            if !seen_values.insert(entry.match_value.as_str()) {
                warnings.push(format!(
                    "status '{}' is shadowed by an earlier row",
                    entry.match_value
                ));
            }
        }

        warnings
    }
}

/// Load config from a TOML file.
///
/// The path is one the operator named, so a missing file is an error rather
/// than a silent fallback to the built-in tables.
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    if !path.exists() {
        return Err(anyhow!("config file not found: {}", path.display()));
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DashboardConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
