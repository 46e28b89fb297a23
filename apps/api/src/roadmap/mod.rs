//! User-roadmap aggregator: one mutable per-user collection of tasks drawn
//! from catalog imports and custom entries, with ordering, status tracking,
//! and derived statistics.

pub mod document;
pub mod handlers;
pub mod models;
pub mod store;
