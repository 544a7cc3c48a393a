//! In-process searches without the job channel.
//!
//! `reverse_md5_sequential` walks every candidate of every length in order
//! on the calling thread and therefore always returns the shortest,
//! lowest-index match. `reverse_md5_rayon` evaluates each length's
//! partitions on the rayon pool; any match within the first length that
//! has one may win.

use rayon::prelude::*;
use tracing::debug;

use super::combinations::Combinations;
use super::digest::TargetHash;
use super::job::Job;
use super::partition::chunk_indices;
use crate::errors::HashQueueResult;

/// Single-threaded reference search
pub fn reverse_md5_sequential(
    target: &TargetHash,
    alphabet: &str,
    max_length: u32,
) -> HashQueueResult<Option<String>> {
    for length in 1..=max_length {
        let combinations = Combinations::new(alphabet, length)?;
        let found = combinations.iter().find(|c| target.matches(c));
        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}

/// Data-parallel search on the rayon pool, one length at a time
pub fn reverse_md5_rayon(
    target: &TargetHash,
    alphabet: &str,
    max_length: u32,
    num_chunks: usize,
) -> HashQueueResult<Option<String>> {
    for length in 1..=max_length {
        let combinations = Combinations::new(alphabet, length)?;
        let jobs = chunk_indices(combinations.size(), num_chunks.max(1) as u64)
            .map(|(start, stop)| Job::new(combinations.clone(), start, stop))
            .collect::<HashQueueResult<Vec<_>>>()?;

        debug!("Sweeping length {} in {} chunks", length, jobs.len());
        let found = jobs
            .par_iter()
            .find_map_any(|job| job.find(target).plaintext);
        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}
