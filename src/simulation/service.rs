// src/simulation/service.rs

use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, SimulationParameters, SweepConfig};
use crate::simulation::controller::{StartOutcome, SweepController, TickOutcome};
use crate::simulation::SweepSnapshot;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("スイープのタスクは既に終了しています。")]
    Closed,
}

enum Command {
    Start {
        parameters: SimulationParameters,
        reply: oneshot::Sender<StartOutcome>,
    },
}

/// コントローラを所有し、一定間隔でティックを進めるタスクへのハンドル
///
/// 破棄するとタスクは中断され、以降スナップショットは更新されない。
pub struct SweepService {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SweepSnapshot>,
    task: JoinHandle<()>,
}

impl SweepService {
    /// 現在の tokio ランタイム上にティック駆動タスクを起動する
    pub fn spawn(config: &SweepConfig) -> Result<Self, ConfigError> {
        let controller = SweepController::new(config)?;
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
        let task = tokio::spawn(pump(
            controller,
            config.tick_interval(),
            command_rx,
            snapshot_tx,
        ));
        Ok(SweepService {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        })
    }

    /// スイープの開始を要求する。実行中なら `AlreadyRunning` が返る
    pub async fn start(&self, parameters: SimulationParameters) -> Result<StartOutcome, ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(Command::Start {
                parameters,
                reply: reply_tx,
            })
            .map_err(|_| ServiceError::Closed)?;
        reply_rx.await.map_err(|_| ServiceError::Closed)
    }

    pub fn subscribe(&self) -> watch::Receiver<SweepSnapshot> {
        self.snapshots.clone()
    }

    /// 最新のスナップショット
    pub fn snapshot(&self) -> SweepSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for SweepService {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// コマンドとティックを一つずつ処理するループ
///
/// ティックは開始から `interval` ごと。評価と公開の間に待ちは入らない。
async fn pump(
    mut controller: SweepController,
    interval: Duration,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<SweepSnapshot>,
) {
    let mut next_tick = Instant::now();

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Start { parameters, reply }) => {
                    let outcome = controller.start(parameters);
                    match outcome {
                        StartOutcome::Started => {
                            if let Some(p) = controller.parameters() {
                                info!(
                                    distance = p.distance,
                                    rain_fall_speed = p.rain_fall_speed,
                                    speeds = controller.walking_speeds().len(),
                                    "スイープを開始します"
                                );
                            }
                            next_tick = Instant::now() + interval;
                            snapshots.send_replace(controller.snapshot());
                        }
                        StartOutcome::AlreadyRunning => {
                            debug!("スイープ実行中のため開始要求を無視します");
                        }
                    }
                    let _ = reply.send(outcome);
                }
                None => {
                    debug!("コマンドチャネルが閉じられました");
                    break;
                }
            },
            _ = tokio::time::sleep_until(next_tick), if controller.is_running() => {
                match controller.advance() {
                    Ok(TickOutcome::Advanced(result)) => {
                        debug!(speed = result.walking_speed, total = result.total_rain, "ティック");
                    }
                    Ok(TickOutcome::Completed(result)) => {
                        debug!(speed = result.walking_speed, total = result.total_rain, "ティック");
                        info!(results = controller.results().len(), "スイープが完了しました");
                    }
                    Ok(TickOutcome::Idle) => {}
                    Err(error) => {
                        warn!(%error, state = ?controller.state(), "スイープを中断しました");
                    }
                }
                next_tick += interval;
                snapshots.send_replace(controller.snapshot());
            }
        }
    }
}
