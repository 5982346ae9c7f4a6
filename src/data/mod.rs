pub mod adapter;
pub mod loader;
pub mod reshape;
pub mod tables;
