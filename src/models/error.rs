// src/models/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("パラメータ {name} の値 {value} は正の有限値ではありません。")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("歩行速度 {0} は正の有限値ではありません。")]
    InvalidWalkingSpeed(f64),
    #[error("計算結果 {name} が有限値になりません（{value}）。")]
    NonFiniteResult { name: &'static str, value: f64 },
}
