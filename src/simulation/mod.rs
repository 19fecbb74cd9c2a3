// src/simulation/mod.rs

pub mod controller;
pub mod load_parameters;
pub mod service;

use crate::models::{ExposureResult, ModelError};

pub use service::SweepService;

/// スイープの状態遷移 `Idle → Running → Completed`（途中で失敗すれば `Failed`）
#[derive(Debug, Clone, PartialEq)]
pub enum SweepState {
    Idle,
    Running { next_index: usize }, // 次に評価する歩行速度の添字
    Completed,
    Failed(ModelError),
}

/// 表示側に公開するスイープの状態のコピー
///
/// `latest` は常に `results` の最後の要素と一致する。
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSnapshot {
    pub state: SweepState,
    pub latest: Option<ExposureResult>,
    pub results: Vec<ExposureResult>,
}

impl SweepSnapshot {
    /// 完了または失敗していれば `true`
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SweepState::Completed | SweepState::Failed(_))
    }

    pub fn error(&self) -> Option<&ModelError> {
        match &self.state {
            SweepState::Failed(error) => Some(error),
            _ => None,
        }
    }
}
