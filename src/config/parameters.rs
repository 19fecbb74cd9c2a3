// src/config/parameters.rs

use serde::Deserialize;

/// 歩行者と雨のパラメータ
///
/// YAML で一部の項目だけを指定した場合、残りは既定値になる。
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationParameters {
    pub distance: f64,        // 歩く距離 (m)
    pub rain_fall_speed: f64, // 雨の落下速度 (m/s)
    pub head_area: f64,       // 頭の面積 (m²)
    pub body_area: f64,       // 体の面積 (m²)
    pub rain_density: f64,    // 雨粒の密度 (個/m³)
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            distance: 10.0,
            rain_fall_speed: 5.0,
            head_area: 0.1,
            body_area: 0.5,
            rain_density: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let params: SimulationParameters = serde_yaml::from_str("distance: 20.0\n").unwrap();

        assert_eq!(params.distance, 20.0);
        assert_eq!(params.rain_fall_speed, 5.0);
        assert_eq!(params.rain_density, 1000.0);
    }
}
