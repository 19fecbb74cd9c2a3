// src/models/exposure.rs

use crate::config::SimulationParameters;
use crate::models::error::ModelError;

/// ある歩行速度で歩いたときに浴びる雨粒の数
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureResult {
    pub walking_speed: f64, // 歩行速度 (m/s)
    pub time_walk: f64,     // 歩行時間 (s)
    pub rain_on_head: f64,  // 頭に当たる雨粒 (個)
    pub rain_on_body: f64,  // 体に当たる雨粒 (個)
    pub total_rain: f64,    // 合計 (個)
}

/// 正の有限値であることを確認する
fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameter { name, value })
    }
}

/// 計算結果が有限値であることを確認する
fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::NonFiniteResult { name, value })
    }
}

/// 歩行者が浴びる雨の量を計算する純粋関数
///
/// 頭は鉛直に落ちる雨の柱を、体は自分が前進してかき分ける雨の柱を受けるとみなす。
///
/// # 引数
/// - `params`: 距離、雨の落下速度、頭と体の面積、雨粒の密度
/// - `walking_speed`: 歩行速度 (m/s)
///
/// # 戻り値
/// - 頭・体・合計の雨粒数
/// - いずれかの値が正の有限値でなければ `ModelError`
pub fn simulate_rain_hit(
    params: &SimulationParameters,
    walking_speed: f64,
) -> Result<ExposureResult, ModelError> {
    if !walking_speed.is_finite() || walking_speed <= 0.0 {
        return Err(ModelError::InvalidWalkingSpeed(walking_speed));
    }
    let distance = ensure_positive("distance", params.distance)?;
    let rain_fall_speed = ensure_positive("rain_fall_speed", params.rain_fall_speed)?;
    let head_area = ensure_positive("head_area", params.head_area)?;
    let body_area = ensure_positive("body_area", params.body_area)?;
    let rain_density = ensure_positive("rain_density", params.rain_density)?;

    let time_walk = ensure_finite("time_walk", distance / walking_speed)?;

    // 頭：鉛直方向の雨
    let volume_head = head_area * rain_fall_speed * time_walk;
    let rain_on_head = ensure_finite("rain_on_head", volume_head * rain_density)?;

    // 体：前進によって受ける雨
    let volume_body = body_area * walking_speed * time_walk;
    let rain_on_body = ensure_finite("rain_on_body", volume_body * rain_density)?;

    let total_rain = ensure_finite("total_rain", rain_on_head + rain_on_body)?;

    Ok(ExposureResult {
        walking_speed,
        time_walk,
        rain_on_head,
        rain_on_body,
        total_rain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SimulationParameters {
        SimulationParameters {
            distance: 10.0,
            rain_fall_speed: 5.0,
            head_area: 0.1,
            body_area: 0.5,
            rain_density: 1000.0,
        }
    }

    /// test_walking_at_two_meters_per_second
    /// 歩行時間 5 s、頭 0.1*5*5*1000 = 2500、体 0.5*10*1000 = 5000、合計 7500
    #[test]
    fn test_walking_at_two_meters_per_second() {
        let result = simulate_rain_hit(&params(), 2.0).unwrap();

        assert!((result.time_walk - 5.0).abs() < 1e-9);
        assert!((result.rain_on_head - 2500.0).abs() < 1e-6);
        assert!((result.rain_on_body - 5000.0).abs() < 1e-6);
        assert!((result.total_rain - 7500.0).abs() < 1e-6);
    }

    /// test_doubling_speed_halves_head_rain
    /// 速度を 4 m/s にすると頭は 1250 に半減し、体は 5000 のまま
    #[test]
    fn test_doubling_speed_halves_head_rain() {
        let slow = simulate_rain_hit(&params(), 2.0).unwrap();
        let fast = simulate_rain_hit(&params(), 4.0).unwrap();

        assert!((fast.rain_on_head - 1250.0).abs() < 1e-6);
        assert!((fast.rain_on_body - 5000.0).abs() < 1e-6);
        assert!((fast.total_rain - 6250.0).abs() < 1e-6);
        assert!((slow.rain_on_head / fast.rain_on_head - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_body_rain_is_independent_of_speeds() {
        let base = params();
        let expected = base.body_area * base.distance * base.rain_density;

        for rain_fall_speed in [0.5, 5.0, 9.0] {
            let p = SimulationParameters {
                rain_fall_speed,
                ..base.clone()
            };
            for speed in [0.5, 1.0, 2.0, 3.0, 4.0, 7.5] {
                let result = simulate_rain_hit(&p, speed).unwrap();
                assert!((result.rain_on_body - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_head_rain_decreases_with_speed() {
        let p = params();
        let mut previous = f64::INFINITY;
        for speed in [0.5, 1.0, 2.0, 3.0, 4.0] {
            let result = simulate_rain_hit(&p, speed).unwrap();
            let expected = p.head_area * p.rain_fall_speed * p.distance / speed * p.rain_density;
            assert!((result.rain_on_head - expected).abs() < 1e-6);
            assert!(result.rain_on_head < previous);
            assert_eq!(result.total_rain, result.rain_on_head + result.rain_on_body);
            previous = result.rain_on_head;
        }
    }

    #[test]
    fn test_negative_distance_is_refused() {
        let p = SimulationParameters {
            distance: -1.0,
            ..params()
        };
        assert_eq!(
            simulate_rain_hit(&p, 2.0),
            Err(ModelError::InvalidParameter {
                name: "distance",
                value: -1.0
            })
        );
    }

    /// test_overflowing_result_is_refused
    /// 入力は正の有限値でも、雨粒数が inf になる場合は結果を返さない
    #[test]
    fn test_overflowing_result_is_refused() {
        let p = SimulationParameters {
            distance: 1e300,
            rain_density: 1e300,
            ..params()
        };
        assert!(matches!(
            simulate_rain_hit(&p, 0.5),
            Err(ModelError::NonFiniteResult { name: "rain_on_head", .. })
        ));

        let huge = SimulationParameters {
            distance: 1e306,
            ..params()
        };
        assert!(simulate_rain_hit(&huge, 0.5).is_err());
    }

    #[test]
    fn test_unparsed_input_is_refused() {
        let p = SimulationParameters {
            head_area: f64::NAN,
            ..params()
        };
        assert!(matches!(
            simulate_rain_hit(&p, 2.0),
            Err(ModelError::InvalidParameter { name: "head_area", .. })
        ));
    }

    #[test]
    fn test_zero_walking_speed_is_refused() {
        assert_eq!(
            simulate_rain_hit(&params(), 0.0),
            Err(ModelError::InvalidWalkingSpeed(0.0))
        );
        assert!(simulate_rain_hit(&params(), -1.0).is_err());
    }
}
