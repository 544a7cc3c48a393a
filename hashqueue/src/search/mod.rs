//! Parallel reverse search over MD5 digests.
//!
//! # Architecture
//!
//! A search for one target digest is split into jobs, each naming a range
//! of one candidate space:
//!
//! 1. **Candidate generation**: [`Combinations`] maps an index to the Nth
//!    string of an alphabet and length. Jobs carry the generator itself, so
//!    workers rebuild candidates locally and only three small values cross
//!    the channel per job.
//!
//! 2. **Partitioning**: [`chunk_indices`] splits each space into one
//!    contiguous range per worker, sizes differing by at most one.
//!
//! 3. **Workers**: each [`Worker`] thread takes [`WorkItem`]s from a shared
//!    input channel, hashes its range, and publishes a match on the output
//!    channel.
//!
//! 4. **Coordination**: [`reverse_md5`] enqueues all jobs for lengths
//!    `1..=max_length`, then a single [`WorkItem::Shutdown`], and polls the
//!    output channel until a result arrives or every worker has exited.
//!
//! # Shutdown
//!
//! The input channel has many consumers but the coordinator enqueues the
//! shutdown item only once. Whichever worker takes it puts it straight back
//! before stopping, so it passes from worker to worker until all have seen
//! it:
//!
//! ```rust,ignore
//! match jobs_rx.recv() {
//!     Ok(WorkItem::Shutdown) => {
//!         let _ = jobs_tx.send(WorkItem::Shutdown);
//!         WorkerState::Stopped
//!     }
//!     Ok(WorkItem::Job(job)) => /* scan [start, stop) */,
//!     Err(_) => WorkerState::Stopped,
//! }
//! ```
//!
//! # Result Ordering
//!
//! The first plaintext reported wins. Jobs are taken in no fixed order, so
//! when a digest has several preimages within the searched lengths any of
//! them may be returned. [`reverse_md5_sequential`] gives the deterministic
//! shortest, lowest-index answer when that matters.

pub mod channel;
pub mod combinations;
pub mod coordinator;
pub mod digest;
pub mod job;
pub mod partition;
pub mod sweep;
pub mod worker;

pub use combinations::Combinations;
pub use coordinator::reverse_md5;
pub use digest::TargetHash;
pub use job::{Job, JobReport, WorkItem};
pub use partition::chunk_indices;
pub use sweep::{reverse_md5_rayon, reverse_md5_sequential};
pub use worker::{Worker, WorkerState};
