// src/view/chart.rs

use crate::models::ExposureResult;

/// 折れ線グラフの一系列
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str, // 凡例
    pub key: &'static str,  // データのキー
    pub values: Vec<f64>,
}

/// 歩行速度を横軸とする三系列のグラフデータ
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub walking_speeds: Vec<f64>,
    pub series: Vec<Series>,
}

pub fn chart_data(results: &[ExposureResult]) -> ChartData {
    let column = |f: fn(&ExposureResult) -> f64| results.iter().map(f).collect::<Vec<f64>>();
    ChartData {
        walking_speeds: column(|r| r.walking_speed),
        series: vec![
            Series {
                name: "Total Rain",
                key: "totalRain",
                values: column(|r| r.total_rain),
            },
            Series {
                name: "Head Rain",
                key: "rainOnHead",
                values: column(|r| r.rain_on_head),
            },
            Series {
                name: "Body Rain",
                key: "rainOnBody",
                values: column(|r| r.rain_on_body),
            },
        ],
    }
}

/// 合計の雨粒数が最小となる結果
pub fn best_speed(results: &[ExposureResult]) -> Option<&ExposureResult> {
    results
        .iter()
        .min_by(|a, b| a.total_rain.total_cmp(&b.total_rain))
}

/// 端末向けの簡易グラフ
///
/// 各行は一つの歩行速度で、棒の長さは合計の雨粒数に比例する。
pub fn render_text_chart(results: &[ExposureResult], width: usize) -> String {
    let data = chart_data(results);
    let [total, head, body] = [0, 1, 2].map(|i| &data.series[i].values);
    let max = total.iter().copied().fold(0.0_f64, f64::max);
    let best = best_speed(results).map(|r| r.walking_speed);

    let mut out = String::from("Rain vs Walking Speed\n");
    for (i, speed) in data.walking_speeds.iter().enumerate() {
        let bar = if max > 0.0 {
            ((total[i] / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:>5.1} m/s |{:<width$}| total {:>9.1}  head {:>9.1}  body {:>9.1}",
            speed,
            "#".repeat(bar),
            total[i],
            head[i],
            body[i],
            width = width
        ));
        if best == Some(*speed) {
            out.push_str("  <- least rain");
        }
        out.push('\n');
    }
    out
}
