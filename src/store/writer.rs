use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use crate::constants::SETTINGS_STORAGE_KEY;
use crate::error::{PrayerError, PrayerResult};
use crate::logging::{log_debug, log_error};
use crate::models::Settings;
use crate::store::Storage;

/// Outcome of the most recent write attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistStatus {
    Idle,
    Saved { revision: u64 },
    Failed { revision: u64, message: String },
}

/// A write that did not land. Every failure is broadcast, so a consumer that
/// polls less often than the writer runs still sees each one.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistFailure {
    pub revision: u64,
    pub message: String,
}

const FAILURE_BACKLOG: usize = 16;

enum WriteCommand {
    Write { revision: u64, settings: Settings },
    Flush(oneshot::Sender<PrayerResult<()>>),
}

/// Background writer that persists settings snapshots in order.
///
/// Every mutation enqueues one snapshot. Snapshots still waiting when the
/// writer wakes up are coalesced into the newest one, so there is at most one
/// write per mutation and an older snapshot never lands after a newer one.
pub struct WriteQueue {
    sender: mpsc::UnboundedSender<WriteCommand>,
    status: watch::Receiver<PersistStatus>,
    failures: broadcast::Sender<PersistFailure>,
}

impl WriteQueue {
    /// Spawn the writer task. Must be called from inside a tokio runtime.
    pub fn spawn(storage: Arc<dyn Storage>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (status_tx, status) = watch::channel(PersistStatus::Idle);
        let (failures, _) = broadcast::channel(FAILURE_BACKLOG);
        tokio::spawn(run_writer(storage, receiver, status_tx, failures.clone()));

        Self {
            sender,
            status,
            failures,
        }
    }

    pub fn enqueue(&self, revision: u64, settings: Settings) -> PrayerResult<()> {
        self.sender
            .send(WriteCommand::Write { revision, settings })
            .map_err(|_| PrayerError::Persistence("settings writer has stopped".to_string()))
    }

    /// Wait until every snapshot queued so far has been handled. Returns the
    /// error of the last write if it failed.
    pub async fn flush(&self) -> PrayerResult<()> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(WriteCommand::Flush(tx))
            .map_err(|_| PrayerError::Persistence("settings writer has stopped".to_string()))?;
        rx.await
            .map_err(|_| PrayerError::Persistence("settings writer dropped a flush".to_string()))?
    }

    pub fn status(&self) -> watch::Receiver<PersistStatus> {
        self.status.clone()
    }

    /// Receive every failed write from now on.
    pub fn subscribe_failures(&self) -> broadcast::Receiver<PersistFailure> {
        self.failures.subscribe()
    }
}

async fn run_writer(
    storage: Arc<dyn Storage>,
    mut receiver: mpsc::UnboundedReceiver<WriteCommand>,
    status: watch::Sender<PersistStatus>,
    failures: broadcast::Sender<PersistFailure>,
) {
    let mut last_error: Option<String> = None;

    while let Some(command) = receiver.recv().await {
        let (mut revision, mut settings) = match command {
            WriteCommand::Flush(reply) => {
                let _ = reply.send(flush_result(&last_error));
                continue;
            }
            WriteCommand::Write { revision, settings } => (revision, settings),
        };

        let mut flushes = Vec::new();
        while let Ok(next) = receiver.try_recv() {
            match next {
                WriteCommand::Write {
                    revision: newer,
                    settings: snapshot,
                } => {
                    log_debug(&format!("Coalescing settings revision {} into {}", revision, newer));
                    revision = newer;
                    settings = snapshot;
                }
                WriteCommand::Flush(reply) => {
                    // Writes queued after this flush wait for the next round.
                    flushes.push(reply);
                    break;
                }
            }
        }

        match write_snapshot(storage.clone(), &settings).await {
            Ok(()) => {
                log_debug(&format!("Persisted settings revision {}", revision));
                last_error = None;
                let _ = status.send(PersistStatus::Saved { revision });
            }
            Err(e) => {
                let message = e.to_string();
                log_error(&format!("Failed to persist settings revision {}: {}", revision, message));
                last_error = Some(message.clone());
                // No subscribers is fine
                let _ = failures.send(PersistFailure {
                    revision,
                    message: message.clone(),
                });
                let _ = status.send(PersistStatus::Failed { revision, message });
            }
        }

        for reply in flushes {
            let _ = reply.send(flush_result(&last_error));
        }
    }
}

fn flush_result(last_error: &Option<String>) -> PrayerResult<()> {
    match last_error {
        Some(message) => Err(PrayerError::Persistence(message.clone())),
        None => Ok(()),
    }
}

/// JSON has no infinity or NaN; serde_json would write `null` and the whole
/// blob would then fail to load.
fn ensure_storable(settings: &Settings) -> PrayerResult<()> {
    let numbers = [
        ("cardOpacity", settings.card_opacity),
        ("background opacity", settings.background.opacity()),
    ];
    for (name, value) in numbers {
        if !value.is_finite() {
            return Err(PrayerError::Persistence(format!(
                "{} is {}, which cannot be saved",
                name, value
            )));
        }
    }
    Ok(())
}

async fn write_snapshot(storage: Arc<dyn Storage>, settings: &Settings) -> PrayerResult<()> {
    ensure_storable(settings)?;
    let json = serde_json::to_string_pretty(settings)?;
    tokio::task::spawn_blocking(move || storage.write(SETTINGS_STORAGE_KEY, &json))
        .await
        .map_err(|e| PrayerError::Persistence(format!("writer task failed: {}", e)))?
}
