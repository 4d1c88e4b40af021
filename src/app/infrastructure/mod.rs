//! Infrastructure layer - external integrations and utilities.
//!
//! - System clipboard access
//! - Error types

pub mod clipboard;
pub mod error;
