pub mod catalog;
pub mod roadmap;
pub mod resume;
