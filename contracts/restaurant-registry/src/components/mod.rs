pub mod core;
pub mod directory;
