// src/simulation/controller.rs

use crate::config::{ConfigError, SimulationParameters, SweepConfig};
use crate::models::{simulate_rain_hit, ExposureResult, ModelError};
use crate::simulation::{SweepSnapshot, SweepState};

/// 開始要求の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning, // 実行中の要求は無視する
}

/// 1ティックの結果
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Advanced(ExposureResult),  // まだ評価する速度が残っている
    Completed(ExposureResult), // 最後の速度を評価して終了した
    Idle,                      // 実行中ではないので何もしていない
}

/// 歩行速度の列に沿って雨モデルを一つずつ評価する状態機械
#[derive(Debug, Clone)]
pub struct SweepController {
    walking_speeds: Vec<f64>,
    parameters: Option<SimulationParameters>,
    state: SweepState,
    results: Vec<ExposureResult>,
}

impl SweepController {
    /// 設定を検証して待機状態のコントローラを作る
    pub fn new(config: &SweepConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SweepController {
            walking_speeds: config.walking_speeds.clone(),
            parameters: None,
            state: SweepState::Idle,
            results: Vec::with_capacity(config.walking_speeds.len()),
        })
    }

    /// スイープの開始
    ///
    /// パラメータはここで一度だけ取り込み、スイープ中は変わらない。
    /// 実行中に呼ばれた場合は状態を変えずに `AlreadyRunning` を返す。
    pub fn start(&mut self, parameters: SimulationParameters) -> StartOutcome {
        if self.is_running() {
            return StartOutcome::AlreadyRunning;
        }
        self.parameters = Some(parameters);
        self.results.clear();
        self.state = SweepState::Running { next_index: 0 };
        StartOutcome::Started
    }

    /// 1ティック進める
    ///
    /// # 戻り値
    /// - 評価した結果と、スイープが続くかどうか
    /// - モデルが評価を拒否した場合は `ModelError`。スイープは `Failed` で打ち切られる
    pub fn advance(&mut self) -> Result<TickOutcome, ModelError> {
        let index = match self.state {
            SweepState::Running { next_index } => next_index,
            _ => return Ok(TickOutcome::Idle),
        };
        let (Some(parameters), Some(&speed)) = (&self.parameters, self.walking_speeds.get(index))
        else {
            self.state = SweepState::Completed;
            return Ok(TickOutcome::Idle);
        };

        let result = match simulate_rain_hit(parameters, speed) {
            Ok(result) => result,
            Err(error) => {
                self.state = SweepState::Failed(error.clone());
                return Err(error);
            }
        };
        self.results.push(result.clone());

        if index + 1 < self.walking_speeds.len() {
            self.state = SweepState::Running {
                next_index: index + 1,
            };
            Ok(TickOutcome::Advanced(result))
        } else {
            self.state = SweepState::Completed;
            Ok(TickOutcome::Completed(result))
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SweepState::Running { .. })
    }

    pub fn state(&self) -> &SweepState {
        &self.state
    }

    pub fn latest(&self) -> Option<&ExposureResult> {
        self.results.last()
    }

    pub fn results(&self) -> &[ExposureResult] {
        &self.results
    }

    /// 現在のスイープが取り込んだパラメータ
    pub fn parameters(&self) -> Option<&SimulationParameters> {
        self.parameters.as_ref()
    }

    pub fn walking_speeds(&self) -> &[f64] {
        &self.walking_speeds
    }

    pub fn snapshot(&self) -> SweepSnapshot {
        SweepSnapshot {
            state: self.state.clone(),
            latest: self.latest().cloned(),
            results: self.results.clone(),
        }
    }
}
