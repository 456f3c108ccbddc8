pub mod error;
pub mod config;
pub mod telemetry;

pub use error::*;
pub use config::*;
pub use telemetry::*;
