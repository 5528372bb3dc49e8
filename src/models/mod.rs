pub mod config;
pub mod item;
