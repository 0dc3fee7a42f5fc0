//! Deterministic, pure presentation logic.
//!
//! Core modules must be free of I/O side effects. They take the current
//! context as arguments and return fresh values, so identical inputs always
//! produce identical decisions.

pub mod active_route;
pub mod classes;
pub mod status;
pub mod types;
