//! Domain types, errors and payload validation for the projects service.
//!
//! Nothing in this crate knows about HTTP or a particular storage engine.

pub mod config;
pub mod error;
pub mod project;
pub mod types;
pub mod validation;
