// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;
use tracing::info;

use crate::config::{ConfigError, SimulationParameters, SweepConfig};

pub const PARAMETERS_FILE: &str = "rain_parameters.yaml";
pub const SWEEP_FILE: &str = "sweep.yaml";

/// YAML ファイルの読み込み
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let file = File::open(path)?;
    let value: T = from_reader(file)?;
    Ok(value)
}

/// ファイルが無ければ既定値を返す
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        info!(path = %path.display(), "設定ファイルが無いため既定値を使います");
        return Ok(T::default());
    }
    load_yaml(path)
}

/// 雨と歩行者のパラメータの読み込み
pub fn load_simulation_parameters(config_dir: &Path) -> Result<SimulationParameters, ConfigError> {
    load_or_default(&config_dir.join(PARAMETERS_FILE))
}

/// スイープ設定の読み込みと検証
pub fn load_sweep_config(config_dir: &Path) -> Result<SweepConfig, ConfigError> {
    let config: SweepConfig = load_or_default(&config_dir.join(SWEEP_FILE))?;
    config.validate()?;
    Ok(config)
}
