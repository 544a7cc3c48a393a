use std::fmt;
use std::time::Duration;

use crate::metrics::MetricsSnapshot;

/// Outcome of one reverse-MD5 search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackOutcome {
    /// The recovered plaintext; `None` when the space was exhausted
    pub plaintext: Option<String>,
    /// Wall-clock time from the start of the search to the result
    pub elapsed: Duration,
    /// Counters at the moment the outcome was produced
    pub stats: MetricsSnapshot,
}

impl CrackOutcome {
    pub fn found(&self) -> bool {
        self.plaintext.is_some()
    }
}

impl fmt::Display for CrackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.plaintext {
            Some(plaintext) => write!(
                f,
                "{} (found in {:.1}s)",
                plaintext,
                self.elapsed.as_secs_f64()
            ),
            None => f.write_str("Unable to find a solution"),
        }
    }
}
