// src/config/mod.rs

pub mod error;
pub mod parameters;
pub mod sweep;

pub use error::ConfigError;
pub use parameters::SimulationParameters;
pub use sweep::SweepConfig;
