// src/models/mod.rs

pub mod error;
pub mod exposure;

pub use error::ModelError;
pub use exposure::{simulate_rain_hit, ExposureResult};
