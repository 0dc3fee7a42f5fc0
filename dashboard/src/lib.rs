//! Presentation state for the Acme dashboard.
//!
//! The crate derives what the dashboard shell should look like from plain
//! data, keeping the derivation separate from anything that renders it:
//!
//! - **[`core`]**: Pure, deterministic derivations (active navigation entry,
//!   status badge, class composition). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (loading and writing the dashboard
//!   configuration).
//!
//! [`nav`] holds the built-in navigation entries and status table used when
//! no configuration file overrides them.

pub mod core;
pub mod io;
pub mod logging;
pub mod nav;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
