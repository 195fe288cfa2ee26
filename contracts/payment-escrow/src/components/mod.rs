pub mod core;
pub mod settlement;
