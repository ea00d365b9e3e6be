pub mod bootstrapper;
pub mod config;
