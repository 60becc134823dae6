pub mod lookups;
pub mod render;
