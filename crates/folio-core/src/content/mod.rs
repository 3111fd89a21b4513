//! Read-only portfolio content.
//!
//! This module provides:
//! - The immutable [`ContentStore`] that search reads from
//! - The embedded default portfolio
//! - Loading and validating content from JSON documents

mod defaults;
mod loader;
mod store;

pub use defaults::default_document;
pub use loader::{load_document, parse_document, ContentDocument};
pub use store::ContentStore;
