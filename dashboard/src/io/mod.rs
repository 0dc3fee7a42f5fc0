//! Side-effecting operations for the dashboard.

pub mod config;
