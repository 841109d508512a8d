pub mod config;
pub mod error;
pub mod timer;

pub use config::{Config, ConfigError};
pub use error::CaptionError;
pub use timer::{OneShotTimer, PeriodicTimer};
