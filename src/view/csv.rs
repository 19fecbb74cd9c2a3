// src/view/csv.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::ExposureResult;

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: &Path) -> Result<Box<dyn Write>, std::io::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(
        b"walking_speed(m/s),time_walk(s),rain_on_head(drops),rain_on_body(drops),total_rain(drops)\n",
    )
}

/// CSV行の作成
pub fn create_csv_row(result: &ExposureResult) -> String {
    format!(
        "{},{},{},{},{}\n",
        result.walking_speed,
        result.time_walk,
        result.rain_on_head,
        result.rain_on_body,
        result.total_rain
    )
}

/// スイープ結果をまとめて書き出す
pub fn write_results_csv(path: &Path, results: &[ExposureResult]) -> Result<(), std::io::Error> {
    let mut writer = setup_csv_output(path)?;
    for result in results {
        writer.write_all(create_csv_row(result).as_bytes())?;
    }
    writer.flush()
}
