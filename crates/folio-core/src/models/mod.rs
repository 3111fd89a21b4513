//! Data models for portfolio content.
//!
//! These types mirror the content collections rendered by the site and are
//! read-only once loaded into a [`ContentStore`](crate::content::ContentStore).

mod experience;
mod project;
mod skill;

pub use experience::*;
pub use project::*;
pub use skill::*;
