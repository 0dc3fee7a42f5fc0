//! Conditional class name composition.
//!
//! Mirrors the usual `clsx`-style helper: a base string followed by the
//! fragments whose predicate holds, in declaration order.

/// Join `base` with every enabled fragment, separated by single spaces.
///
/// Empty and whitespace-only parts are skipped, as are disabled fragments.
pub fn compose_classes(base: &str, conditionals: &[(bool, &str)]) -> String {
    std::iter::once(base)
        .chain(
            conditionals
                .iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, fragment)| *fragment),
        )
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
