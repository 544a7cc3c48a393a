use crossbeam_channel::RecvTimeoutError;
use std::thread::JoinHandle;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::channel::{create_channels, CoordinatorChannels};
use super::combinations::Combinations;
use super::digest::TargetHash;
use super::job::{Job, WorkItem};
use super::partition::chunk_indices;
use super::worker::Worker;
use crate::config::CrackConfig;
use crate::errors::{HashQueueError, HashQueueResult};
use crate::metrics::SearchMetrics;
use crate::results::CrackOutcome;

/// Searches for a plaintext whose MD5 digest is `target` using a pool of
/// worker threads.
///
/// Every length from 1 to `config.max_length` is split into one job per
/// worker. The first plaintext any worker reports is returned at once;
/// remaining workers are told to stop and finish their current job in the
/// background. If every worker exits without a result, the outcome carries
/// no plaintext.
pub fn reverse_md5(target: &TargetHash, config: &CrackConfig) -> HashQueueResult<CrackOutcome> {
    config.validate()?;
    let start_time = Instant::now();
    let num_workers = config.num_workers.get();
    let metrics = SearchMetrics::new();

    info!(
        "Reversing {} with {} workers, lengths 1..={}",
        target, num_workers, config.max_length
    );

    let spaces = (1..=config.max_length)
        .map(|length| Combinations::new(&config.alphabet, length))
        .collect::<HashQueueResult<Vec<_>>>()?;

    let (channels, worker_channels) = create_channels(num_workers);

    let mut handles = Vec::with_capacity(num_workers);
    for (id, worker_channels) in worker_channels.into_iter().enumerate() {
        let worker = Worker::new(id, *target, worker_channels, metrics.clone());
        match worker.spawn() {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                // Release the workers already blocked on the job channel.
                let _ = channels.jobs_tx.send(WorkItem::Shutdown);
                return Err(e.into());
            }
        }
    }

    enqueue_jobs(&channels, &spaces, num_workers as u64, &metrics)?;

    let plaintext = poll_results(&channels, &handles, config);

    if plaintext.is_some() {
        channels.stop.signal_stop();
    } else {
        for handle in handles {
            if handle.join().is_err() {
                warn!("A worker thread panicked");
            }
        }
    }

    metrics.log_stats();
    let outcome = CrackOutcome {
        plaintext,
        elapsed: start_time.elapsed(),
        stats: metrics.snapshot(),
    };
    info!("Search finished: {}", outcome);
    Ok(outcome)
}

/// Puts one job per partition of every space on the input channel,
/// followed by a single shutdown item.
fn enqueue_jobs(
    channels: &CoordinatorChannels,
    spaces: &[Combinations],
    num_workers: u64,
    metrics: &SearchMetrics,
) -> HashQueueResult<()> {
    for combinations in spaces {
        let size = combinations.size();
        for (start, stop) in chunk_indices(size, num_workers) {
            let job = Job::new(combinations.clone(), start, stop)?;
            channels
                .jobs_tx
                .send(WorkItem::Job(job))
                .map_err(|_| HashQueueError::channel_closed("job channel"))?;
            metrics.record_dispatch();
        }
        debug!(
            "Enqueued length {} ({} candidates)",
            combinations.length(),
            size
        );
    }

    channels
        .jobs_tx
        .send(WorkItem::Shutdown)
        .map_err(|_| HashQueueError::channel_closed("job channel"))
}

/// Waits for the first non-empty result while any worker is alive
fn poll_results(
    channels: &CoordinatorChannels,
    handles: &[JoinHandle<()>],
    config: &CrackConfig,
) -> Option<String> {
    let poll_interval = config.poll_interval();

    while handles.iter().any(|h| !h.is_finished()) {
        match channels.results_rx.recv_timeout(poll_interval) {
            Ok(plaintext) if !plaintext.is_empty() => return Some(plaintext),
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return None,
        }
    }

    // A worker may have published just before exiting.
    channels
        .results_rx
        .try_iter()
        .find(|plaintext| !plaintext.is_empty())
}
