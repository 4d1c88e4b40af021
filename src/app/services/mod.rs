//! Services layer - business operations and utilities.
//!
//! - Catalog loading (file or HTTP)
//! - Snippet execution through the external service
//! - Display-safe escaping
//! - HTML export of a language group

pub mod catalog_loader;
pub mod executor;
pub mod export;
pub mod markup;

#[cfg(test)]
pub(crate) mod test_http;
