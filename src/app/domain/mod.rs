//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Catalog, LanguageGroup and Snippet
//! - Application settings
//! - Message types for the event system

pub mod catalog;
pub mod messages;
pub mod settings;

pub use catalog::{Catalog, CatalogDocument, LanguageGroup, Snippet};
pub use messages::Message;
pub use settings::{AppSettings, ThemeMode};
