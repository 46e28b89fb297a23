//! Resume store and template renderer: per-user resume documents, default
//! merging onto placeholder content, and three fixed HTML layouts.

pub mod handlers;
pub mod models;
pub mod render;
pub mod store;
pub mod template;
