pub mod config;
pub mod lookups;
