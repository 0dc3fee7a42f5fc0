//! Active navigation entry resolution.
//!
//! An entry is active only when its target path equals the current location
//! byte for byte. Prefixes, trailing slashes and query strings all count as
//! different locations.

use crate::core::types::{LinkVariant, NavDecision, NavigationEntry};

/// Resolve one entry against the current location.
pub fn resolve(current_location: &str, entry: &NavigationEntry) -> NavDecision {
    if current_location == entry.target_path {
        NavDecision {
            is_active: true,
            variant: LinkVariant::Active,
        }
    } else {
        NavDecision {
            is_active: false,
            variant: LinkVariant::Default,
        }
    }
}

/// Resolve every entry independently, preserving declaration order.
///
/// Duplicate target paths are not collapsed: each matching entry is active.
pub fn resolve_all<'a>(
    current_location: &str,
    entries: &'a [NavigationEntry],
) -> Vec<(&'a NavigationEntry, NavDecision)> {
    entries
        .iter()
        .map(|entry| (entry, resolve(current_location, entry)))
        .collect()
}
