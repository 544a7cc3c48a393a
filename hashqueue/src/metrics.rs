use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Counters shared between the coordinator and its workers
#[derive(Debug, Clone, Default)]
pub struct SearchMetrics {
    jobs_dispatched: Arc<AtomicU64>,
    jobs_completed: Arc<AtomicU64>,
    candidates_hashed: Arc<AtomicU64>,
    workers_stopped: Arc<AtomicU64>,
}

/// Point-in-time copy of [`SearchMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub jobs_dispatched: u64,
    pub jobs_completed: u64,
    pub candidates_hashed: u64,
    pub workers_stopped: u64,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a job placed on the input channel
    pub fn record_dispatch(&self) {
        self.jobs_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a job a worker finished evaluating
    pub fn record_job(&self, candidates: u64) {
        self.jobs_completed.fetch_add(1, Ordering::Relaxed);
        let total = self
            .candidates_hashed
            .fetch_add(candidates, Ordering::Relaxed)
            + candidates;
        debug!("Hashed {} candidates, total: {}", candidates, total);
    }

    pub fn record_worker_stopped(&self) {
        self.workers_stopped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn jobs_dispatched(&self) -> u64 {
        self.jobs_dispatched.load(Ordering::Relaxed)
    }

    pub fn jobs_completed(&self) -> u64 {
        self.jobs_completed.load(Ordering::Relaxed)
    }

    pub fn candidates_hashed(&self) -> u64 {
        self.candidates_hashed.load(Ordering::Relaxed)
    }

    pub fn workers_stopped(&self) -> u64 {
        self.workers_stopped.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            jobs_dispatched: self.jobs_dispatched(),
            jobs_completed: self.jobs_completed(),
            candidates_hashed: self.candidates_hashed(),
            workers_stopped: self.workers_stopped(),
        }
    }

    /// Logs current statistics
    pub fn log_stats(&self) {
        let stats = self.snapshot();
        info!(
            "Search stats: {} of {} jobs evaluated, {} candidates hashed, {} workers stopped",
            stats.jobs_completed,
            stats.jobs_dispatched,
            stats.candidates_hashed,
            stats.workers_stopped
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_counters() {
        let metrics = SearchMetrics::new();
        metrics.record_dispatch();
        metrics.record_dispatch();
        metrics.record_job(100);
        metrics.record_worker_stopped();

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                jobs_dispatched: 2,
                jobs_completed: 1,
                candidates_hashed: 100,
                workers_stopped: 1,
            }
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let metrics = SearchMetrics::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        metrics.record_job(5);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.jobs_completed(), 40);
        assert_eq!(metrics.candidates_hashed(), 200);
    }
}
