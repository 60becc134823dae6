pub mod builtin;
pub mod csv;
