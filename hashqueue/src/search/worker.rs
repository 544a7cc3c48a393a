use std::io;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use super::channel::WorkerChannels;
use super::digest::TargetHash;
use super::job::WorkItem;
use crate::metrics::SearchMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Running,
    Stopped,
}

/// Pulls jobs off the shared input channel until it finds the target,
/// meets the shutdown item, or is told to stop.
#[derive(Debug)]
pub struct Worker {
    id: usize,
    target: TargetHash,
    channels: WorkerChannels,
    metrics: SearchMetrics,
    state: WorkerState,
}

impl Worker {
    pub fn new(
        id: usize,
        target: TargetHash,
        channels: WorkerChannels,
        metrics: SearchMetrics,
    ) -> Self {
        Self {
            id,
            target,
            channels,
            metrics,
            state: WorkerState::Running,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Takes one item from the input channel and acts on it.
    /// Blocks until an item is available.
    pub fn step(&mut self) -> WorkerState {
        if self.state == WorkerState::Stopped {
            return self.state;
        }
        self.state = self.next_state();
        if self.state == WorkerState::Stopped {
            self.metrics.record_worker_stopped();
        }
        self.state
    }

    fn next_state(&self) -> WorkerState {
        if self.channels.stop.should_stop() {
            debug!("Worker {} stopping on coordinator signal", self.id);
            return WorkerState::Stopped;
        }

        let job = match self.channels.jobs_rx.recv() {
            Ok(WorkItem::Job(job)) => job,
            Ok(WorkItem::Shutdown) => {
                // Peers are still blocked on the channel; pass the item on.
                let _ = self.channels.jobs_tx.send(WorkItem::Shutdown);
                debug!("Worker {} received shutdown", self.id);
                return WorkerState::Stopped;
            }
            Err(_) => {
                debug!("Worker {} input channel closed", self.id);
                return WorkerState::Stopped;
            }
        };

        if self.channels.stop.should_stop() {
            return WorkerState::Stopped;
        }

        trace!(
            "Worker {} scanning [{}, {}) of length {}",
            self.id,
            job.start(),
            job.stop(),
            job.combinations().length()
        );
        let report = job.find(&self.target);
        self.metrics.record_job(report.candidates_hashed);

        match report.plaintext {
            Some(plaintext) => {
                debug!("Worker {} found a match", self.id);
                let _ = self.channels.results_tx.send(plaintext);
                WorkerState::Stopped
            }
            None => WorkerState::Running,
        }
    }

    /// Steps until stopped
    pub fn run(mut self) {
        while self.step() == WorkerState::Running {}
    }

    /// Runs the worker on a named thread
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(format!("md5-worker-{}", self.id))
            .spawn(move || self.run())
    }
}
