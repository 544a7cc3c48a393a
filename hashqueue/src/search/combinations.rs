use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{HashQueueError, HashQueueResult};

/// The fixed-length strings over an alphabet, indexed but never materialized.
///
/// Index `i` is read as a `length`-digit number in base `|alphabet|`, most
/// significant digit first, each digit naming a character of the alphabet.
/// With alphabet `"abc"` and length 2, index 0 is `"aa"`, index 1 is `"ab"`
/// and index 8 is `"cc"`.
///
/// Cloning shares the alphabet, so a job can carry its own generator and a
/// worker can rebuild any candidate from an index alone.
#[derive(Debug, Clone)]
pub struct Combinations {
    alphabet: Arc<[char]>,
    length: u32,
    size: u64,
}

impl Combinations {
    pub fn new(alphabet: &str, length: u32) -> HashQueueResult<Self> {
        let alphabet: Arc<[char]> = alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(HashQueueError::EmptyAlphabet);
        }

        let mut seen = HashSet::with_capacity(alphabet.len());
        if let Some(dup) = alphabet.iter().find(|c| !seen.insert(**c)) {
            return Err(HashQueueError::config_error(format!(
                "alphabet repeats the character '{}'",
                dup
            )));
        }

        let size = (alphabet.len() as u64)
            .checked_pow(length)
            .ok_or_else(|| HashQueueError::space_too_large(alphabet.len(), length))?;

        Ok(Self {
            alphabet,
            length,
            size,
        })
    }

    /// Number of candidates, `|alphabet|^length`
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The candidate at `index`
    pub fn get(&self, index: u64) -> HashQueueResult<String> {
        let mut candidate = String::with_capacity(self.length as usize);
        self.write_into(index, &mut candidate)?;
        Ok(candidate)
    }

    /// Writes the candidate at `index` into `buf`, replacing its contents.
    /// Lets a worker reuse one allocation for a whole range.
    pub fn write_into(&self, index: u64, buf: &mut String) -> HashQueueResult<()> {
        if index >= self.size {
            return Err(HashQueueError::index_out_of_range(index, self.size));
        }

        let base = self.alphabet.len() as u64;
        buf.clear();
        let mut place = if self.length == 0 { 0 } else { self.size / base };
        for _ in 0..self.length {
            let digit = (index / place) % base;
            buf.push(self.alphabet[digit as usize]);
            place /= base;
        }
        Ok(())
    }

    /// Every candidate in index order
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size).filter_map(move |index| self.get(index).ok())
    }
}
