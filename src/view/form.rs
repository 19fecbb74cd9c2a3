// src/view/form.rs

use crate::config::SimulationParameters;

/// 入力欄の文字列を数値にする
///
/// 解釈できない入力は NaN のまま渡し、検証はモデル側に任せる。
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// フォームの入力欄（未入力の欄は設定ファイルの値を使う）
#[derive(Debug, Default, Clone)]
pub struct ParameterForm {
    pub distance: Option<String>,
    pub rain_fall_speed: Option<String>,
    pub head_area: Option<String>,
    pub body_area: Option<String>,
}

impl ParameterForm {
    /// 入力欄の値で `base` を上書きしたパラメータを返す
    pub fn apply(&self, base: &SimulationParameters) -> SimulationParameters {
        let field = |text: &Option<String>, current: f64| match text {
            Some(text) => parse_field(text),
            None => current,
        };
        SimulationParameters {
            distance: field(&self.distance, base.distance),
            rain_fall_speed: field(&self.rain_fall_speed, base.rain_fall_speed),
            head_area: field(&self.head_area, base.head_area),
            body_area: field(&self.body_area, base.body_area),
            rain_density: base.rain_density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("10"), 10.0);
        assert_eq!(parse_field(" 0.25 "), 0.25);
        assert!(parse_field("ten").is_nan());
        assert!(parse_field("").is_nan());
    }

    #[test]
    fn test_form_overrides_only_given_fields() {
        let form = ParameterForm {
            distance: Some("25".to_string()),
            body_area: Some("abc".to_string()),
            ..ParameterForm::default()
        };

        let params = form.apply(&SimulationParameters::default());

        assert_eq!(params.distance, 25.0);
        assert_eq!(params.rain_fall_speed, 5.0);
        assert_eq!(params.head_area, 0.1);
        assert!(params.body_area.is_nan());
        assert_eq!(params.rain_density, 1000.0);
    }
}
