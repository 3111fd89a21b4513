//! API implementation submodules.
//!
//! Each submodule contains `impl Portfolio` blocks that extend the public API
//! with domain-specific methods. The struct definition remains in `lib.rs`.

mod builder;
mod content;
mod search;

pub use builder::PortfolioBuilder;
