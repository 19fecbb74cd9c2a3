// src/view/summary.rs

use crate::models::ExposureResult;
use crate::simulation::{SweepSnapshot, SweepState};

/// 最新の結果を表示するパネル
pub fn format_summary(result: &ExposureResult) -> String {
    format!(
        "Walking Speed: {} m/s\nRain on Head: {:.1} drops\nRain on Body: {:.1} drops\nTotal Rain: {:.1} drops\n",
        result.walking_speed, result.rain_on_head, result.rain_on_body, result.total_rain
    )
}

/// スイープの進行状況の一行表示
pub fn format_progress(snapshot: &SweepSnapshot, total: usize) -> String {
    match &snapshot.state {
        SweepState::Idle => "idle".to_string(),
        SweepState::Running { next_index } => format!("running ({}/{})", next_index, total),
        SweepState::Completed => format!("completed ({}/{})", snapshot.results.len(), total),
        SweepState::Failed(error) => format!("failed: {}", error),
    }
}
