//! Shared value types for the presentation core.
//!
//! Everything here is an immutable value: configuration entries are built
//! once at startup, and decisions are recomputed on every call.

use serde::{Deserialize, Serialize};

/// A link in the dashboard side navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    /// Canonical absolute path, compared verbatim against the current location.
    pub target_path: String,
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_path: target_path.into(),
        }
    }
}

/// Visual variant of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkVariant {
    Default,
    Active,
}

impl LinkVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkVariant::Default => "default",
            LinkVariant::Active => "active",
        }
    }
}

/// Outcome of resolving one navigation entry against the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavDecision {
    pub is_active: bool,
    pub variant: LinkVariant,
}

/// Abstract badge style. The theme maps each variant to concrete classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    /// No distinguishing style. Also used for unmapped statuses.
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

impl StyleVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleVariant::Neutral => "neutral",
            StyleVariant::Success => "success",
            StyleVariant::Warning => "warning",
            StyleVariant::Danger => "danger",
        }
    }
}

/// One row of the status mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMappingEntry {
    pub match_value: String,
    pub display_label: String,
    #[serde(default)]
    pub style_variant: StyleVariant,
}

impl StatusMappingEntry {
    pub fn new(
        match_value: impl Into<String>,
        display_label: impl Into<String>,
        style_variant: StyleVariant,
    ) -> Self {
        Self {
            match_value: match_value.into(),
            display_label: display_label.into(),
            style_variant,
        }
    }
}

/// Label and style to render for a status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationDecision {
    pub display_label: String,
    pub style_variant: StyleVariant,
}
