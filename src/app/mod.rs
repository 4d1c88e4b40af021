//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Catalog, Settings, Messages)
//! - `controllers/` - Pure state (active language, cards, execution output)
//! - `services/` - Business operations (catalog loading, execution, escaping, export)
//! - `infrastructure/` - External integrations (clipboard, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::catalog::{CardAction, CardEffect, CardId, CatalogController};
pub use controllers::execution::{ExecutionTracker, RequestToken};
pub use domain::{AppSettings, Catalog, LanguageGroup, Message, Snippet, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use services::executor::{ExecutionOutcome, ExecutionService, HttpExecutionService};
