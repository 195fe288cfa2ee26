pub mod core;
pub mod lifecycle;
pub mod rewards;
