pub mod config;
pub mod error;
pub mod listings;
pub mod telemetry;
pub mod wws;
