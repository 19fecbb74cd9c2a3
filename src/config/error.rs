// src/config/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ファイルを読み込めません: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML の形式が不正です: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("歩行速度の設定が不正です: {0}")]
    InvalidWalkingSpeeds(String),
    #[error("ティック間隔は 0 より大きくなければなりません。")]
    ZeroTickInterval,
}
