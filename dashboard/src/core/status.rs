//! Status badge presentation.

use crate::core::types::{PresentationDecision, StatusMappingEntry, StyleVariant};

/// Present a status value using a first-match-wins table.
///
/// Unmapped values are echoed verbatim with the neutral variant so a status
/// the table does not know yet is still shown.
pub fn present(status_value: &str, table: &[StatusMappingEntry]) -> PresentationDecision {
    match table.iter().find(|entry| entry.match_value == status_value) {
        Some(entry) => PresentationDecision {
            display_label: entry.display_label.clone(),
            style_variant: entry.style_variant,
        },
        None => PresentationDecision {
            display_label: status_value.to_string(),
            style_variant: StyleVariant::Neutral,
        },
    }
}
