//! Controllers layer - UI state without widgets.
//!
//! - Catalog: active language, rendered cards, copy confirmations
//! - Execution: request tokens and the output console text

pub mod catalog;
pub mod execution;
