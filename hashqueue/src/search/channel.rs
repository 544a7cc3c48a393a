//! Channels connecting the coordinator with its workers.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::job::WorkItem;

/// Flag raised by the coordinator once it has a result.
///
/// Workers read it between jobs only; a range already being scanned runs to
/// completion.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    pub fn should_stop(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    pub fn signal_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

/// Channel endpoints for a worker.
#[derive(Debug, Clone)]
pub struct WorkerChannels {
    /// Takes jobs and the shutdown item.
    pub jobs_rx: Receiver<WorkItem>,
    /// Puts the shutdown item back for peer workers.
    pub jobs_tx: Sender<WorkItem>,
    /// Publishes a found plaintext.
    pub results_tx: Sender<String>,
    pub stop: Arc<StopSignal>,
}

/// Channel endpoints for the coordinator.
///
/// The coordinator holds no result sender, so the result channel reports
/// disconnection once every worker has dropped its endpoints.
#[derive(Debug)]
pub struct CoordinatorChannels {
    pub jobs_tx: Sender<WorkItem>,
    pub results_rx: Receiver<String>,
    pub stop: Arc<StopSignal>,
}

/// Create one shared job channel and one shared result channel for
/// `num_workers` workers.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let stop = Arc::new(StopSignal::default());
    let (jobs_tx, jobs_rx) = unbounded();
    let (results_tx, results_rx) = unbounded();

    let workers = (0..num_workers)
        .map(|_| WorkerChannels {
            jobs_rx: jobs_rx.clone(),
            jobs_tx: jobs_tx.clone(),
            results_tx: results_tx.clone(),
            stop: Arc::clone(&stop),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        jobs_tx,
        results_rx,
        stop,
    };

    (coordinator, workers)
}
