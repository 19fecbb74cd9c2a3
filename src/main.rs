// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use simulation::load_parameters::*;
use simulation::SweepService;
use view::chart::{best_speed, render_text_chart};
use view::csv::write_results_csv;
use view::form::ParameterForm;
use view::summary::{format_progress, format_summary};

mod config;
mod models;
mod simulation;
mod view;

/// 雨の中を歩く速さと濡れ方のシミュレーション
#[derive(Parser, Debug)]
#[command(name = "rainsim")]
#[command(version, about = "Rain exposure vs walking speed", long_about = None)]
struct Cli {
    /// ログの詳細度 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// 設定ファイルのディレクトリ
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// 結果のCSV出力先
    #[arg(short, long, default_value = "output/rain_results.csv")]
    output: PathBuf,

    /// ティック間隔 (ms)。設定ファイルの値を上書きする
    #[arg(long)]
    interval_ms: Option<u64>,

    /// 歩く距離 (m)
    #[arg(long, allow_hyphen_values = true)]
    distance: Option<String>,

    /// 雨の落下速度 (m/s)
    #[arg(long, allow_hyphen_values = true)]
    rain_speed: Option<String>,

    /// 頭の面積 (m²)
    #[arg(long, allow_hyphen_values = true)]
    head_area: Option<String>,

    /// 体の面積 (m²)
    #[arg(long, allow_hyphen_values = true)]
    body_area: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // ログの初期化
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 設定の読み込み
    let base_params = load_simulation_parameters(&cli.config_dir)?;
    let mut sweep_config = load_sweep_config(&cli.config_dir)?;
    if let Some(interval_ms) = cli.interval_ms {
        sweep_config.tick_interval_ms = interval_ms;
        sweep_config.validate()?;
    }

    // フォーム入力の反映
    let form = ParameterForm {
        distance: cli.distance,
        rain_fall_speed: cli.rain_speed,
        head_area: cli.head_area,
        body_area: cli.body_area,
    };
    let params = form.apply(&base_params);
    info!(?params, "パラメータ");

    // ティックは一つのスレッドで順に処理する
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let snapshot = runtime.block_on(async {
        let service = SweepService::spawn(&sweep_config)?;
        let mut snapshots = service.subscribe();
        let total = sweep_config.walking_speeds.len();
        service.start(params).await?;

        let mut shown = 0;
        loop {
            if snapshots.changed().await.is_err() {
                break;
            }
            let snapshot = snapshots.borrow_and_update().clone();
            if snapshot.results.len() > shown {
                shown = snapshot.results.len();
                if let Some(latest) = &snapshot.latest {
                    println!("[{}]\n{}", format_progress(&snapshot, total), format_summary(latest));
                }
            }
            if snapshot.is_finished() {
                service.shutdown();
                return Ok::<_, Box<dyn Error>>(snapshot);
            }
        }
        Ok(service.snapshot())
    })?;

    if let Some(err) = snapshot.error() {
        error!(%err, "スイープが失敗しました");
        std::process::exit(1);
    }

    print!("{}", render_text_chart(&snapshot.results, 40));
    if let Some(best) = best_speed(&snapshot.results) {
        println!(
            "Least rain at {} m/s ({:.1} drops)",
            best.walking_speed, best.total_rain
        );
    }

    write_results_csv(&cli.output, &snapshot.results)?;
    println!("Simulation finished. Results saved to {}", cli.output.display());
    Ok(())
}
