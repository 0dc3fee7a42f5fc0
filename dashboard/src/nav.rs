//! Built-in navigation entries and status table.

use crate::core::types::{NavigationEntry, StatusMappingEntry, StyleVariant};

pub const HOME_PATH: &str = "/dashboard";
pub const INVOICES_PATH: &str = "/dashboard/invoices";
pub const CUSTOMERS_PATH: &str = "/dashboard/customers";

/// Side navigation shown when the config does not list its own entries.
pub fn default_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("Home", HOME_PATH),
        NavigationEntry::new("Invoices", INVOICES_PATH),
        NavigationEntry::new("Customers", CUSTOMERS_PATH),
    ]
}

/// Invoice status table shown when the config does not list its own.
pub fn default_status_table() -> Vec<StatusMappingEntry> {
    vec![
        StatusMappingEntry::new("pending", "待付款", StyleVariant::Neutral),
        StatusMappingEntry::new("paid", "已付款", StyleVariant::Success),
    ]
}
