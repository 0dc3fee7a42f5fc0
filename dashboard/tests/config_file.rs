//! Integration tests for loading dashboard configuration from TOML.
//!
//! Writes config files into a temp directory and checks that the loaded
//! tables drive the presentation core the way the file describes.

use std::fs;

use dashboard::core::active_route::resolve_all;
use dashboard::core::status::present;
use dashboard::core::types::StyleVariant;
use dashboard::io::config::{DashboardConfig, load_config};

#[test]
fn partial_file_keeps_defaults_for_missing_sections() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("dashboard.toml");
    fs::write(
        &path,
        r#"
[brand]
name = "Globex"
"#,
    )
    .expect("write config");

    let cfg = load_config(&path).expect("load");
    assert_eq!(cfg.brand.name, "Globex");
    assert_eq!(cfg.brand.tagline, "Dashboard");
    assert_eq!(cfg.navigation, DashboardConfig::default().navigation);
    assert_eq!(cfg.statuses, DashboardConfig::default().statuses);
}

#[test]
fn configured_tables_drive_the_resolvers() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("dashboard.toml");
    fs::write(
        &path,
        r#"
[[navigation]]
label = "Reports"
target_path = "/reports"

[[navigation]]
label = "Settings"
target_path = "/settings"

[[statuses]]
match_value = "overdue"
display_label = "Overdue"
style_variant = "danger"

[[statuses]]
match_value = "draft"
display_label = "Draft"
"#,
    )
    .expect("write config");

    let cfg = load_config(&path).expect("load");

    let resolved = resolve_all("/settings", &cfg.navigation);
    let active: Vec<_> = resolved
        .iter()
        .filter(|(_, decision)| decision.is_active)
        .map(|(entry, _)| entry.label.as_str())
        .collect();
    assert_eq!(active, vec!["Settings"]);

    let overdue = present("overdue", &cfg.statuses);
    assert_eq!(overdue.display_label, "Overdue");
    assert_eq!(overdue.style_variant, StyleVariant::Danger);

    let draft = present("draft", &cfg.statuses);
    assert_eq!(draft.style_variant, StyleVariant::Neutral);

    // The built-in table is replaced, not merged.
    let paid = present("paid", &cfg.statuses);
    assert_eq!(paid.display_label, "paid");
    assert_eq!(paid.style_variant, StyleVariant::Neutral);
}

#[test]
fn invalid_file_reports_path_and_field() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("dashboard.toml");
    fs::write(
        &path,
        r#"
[[navigation]]
label = "Home"
target_path = "dashboard"
"#,
    )
    .expect("write config");

    let err = load_config(&path).expect_err("relative path rejected");
    let message = format!("{:#}", err);
    assert!(message.contains("dashboard.toml"), "{message}");
    assert!(message.contains("navigation[0].target_path"), "{message}");
}

#[test]
fn unknown_variant_is_a_parse_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("dashboard.toml");
    fs::write(
        &path,
        r#"
[[statuses]]
match_value = "paid"
display_label = "Paid"
style_variant = "sparkly"
"#,
    )
    .expect("write config");

    let err = load_config(&path).expect_err("unknown variant");
    assert!(format!("{:#}", err).contains("parse"));
}
