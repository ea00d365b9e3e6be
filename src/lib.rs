pub mod application;
pub mod error;
pub mod services;

// Re-export from application for convenience
pub use application::bootstrapper;
pub use application::config;
