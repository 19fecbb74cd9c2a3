// src/config/sweep.rs

use std::time::Duration;

use serde::Deserialize;

use crate::config::error::ConfigError;

/// スイープの設定（歩行速度の列とティック間隔）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SweepConfig {
    pub walking_speeds: Vec<f64>, // 歩行速度 (m/s)、評価順
    pub tick_interval_ms: u64,    // ティック間隔 (ms)
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            walking_speeds: vec![0.5, 1.0, 2.0, 3.0, 4.0],
            tick_interval_ms: 1000,
        }
    }
}

impl SweepConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// 設定の検証
    ///
    /// 歩行速度は空でなく、すべて有限の正の値で、重複してはならない。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walking_speeds.is_empty() {
            return Err(ConfigError::InvalidWalkingSpeeds(
                "歩行速度が一つもありません".to_string(),
            ));
        }
        for (i, speed) in self.walking_speeds.iter().enumerate() {
            if !speed.is_finite() || *speed <= 0.0 {
                return Err(ConfigError::InvalidWalkingSpeeds(format!(
                    "{} 番目の値 {} は正の有限値ではありません",
                    i, speed
                )));
            }
            if self.walking_speeds[..i].contains(speed) {
                return Err(ConfigError::InvalidWalkingSpeeds(format!(
                    "{} が重複しています",
                    speed
                )));
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SweepConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        let config = SweepConfig {
            walking_speeds: vec![1.0, 0.0],
            ..SweepConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWalkingSpeeds(_))
        ));
    }

    #[test]
    fn test_duplicate_and_empty_speeds_are_rejected() {
        let duplicated = SweepConfig {
            walking_speeds: vec![1.0, 2.0, 1.0],
            ..SweepConfig::default()
        };
        let empty = SweepConfig {
            walking_speeds: vec![],
            ..SweepConfig::default()
        };
        assert!(duplicated.validate().is_err());
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = SweepConfig {
            tick_interval_ms: 0,
            ..SweepConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTickInterval)));
    }
}
