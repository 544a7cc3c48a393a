use super::combinations::Combinations;
use super::digest::TargetHash;
use crate::errors::{HashQueueError, HashQueueResult};

/// A slice `[start, stop)` of one candidate space, evaluated by a single worker
#[derive(Debug, Clone)]
pub struct Job {
    combinations: Combinations,
    start: u64,
    stop: u64,
}

/// Item carried on the input channel
#[derive(Debug, Clone)]
pub enum WorkItem {
    /// A range of candidates to hash
    Job(Job),
    /// Stop signal; every worker that takes it puts it back for its peers
    Shutdown,
}

/// What evaluating a job produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    /// The matching plaintext, if any candidate hashed to the target
    pub plaintext: Option<String>,
    /// Candidates hashed before the scan ended
    pub candidates_hashed: u64,
}

impl Job {
    /// Creates a job, requiring `start <= stop <= combinations.size()`
    pub fn new(combinations: Combinations, start: u64, stop: u64) -> HashQueueResult<Self> {
        if start > stop || stop > combinations.size() {
            return Err(HashQueueError::invalid_range(
                start,
                stop,
                combinations.size(),
            ));
        }
        Ok(Self {
            combinations,
            start,
            stop,
        })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn stop(&self) -> u64 {
        self.stop
    }

    pub fn len(&self) -> u64 {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    pub fn combinations(&self) -> &Combinations {
        &self.combinations
    }

    /// Hashes every candidate in the range, stopping at the first match
    pub fn find(&self, target: &TargetHash) -> JobReport {
        let mut candidate = String::with_capacity(self.combinations.length() as usize);
        let mut hashed = 0;

        for index in self.start..self.stop {
            if self.combinations.write_into(index, &mut candidate).is_err() {
                break;
            }
            hashed += 1;
            if target.matches(&candidate) {
                return JobReport {
                    plaintext: Some(candidate),
                    candidates_hashed: hashed,
                };
            }
        }

        JobReport {
            plaintext: None,
            candidates_hashed: hashed,
        }
    }
}
