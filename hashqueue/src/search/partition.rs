/// Splits `[0, length)` into `num_chunks` contiguous ranges of near-equal size.
///
/// Each step sizes the next chunk as the remaining length divided by the
/// remaining chunk count, rounded half to even, so chunk sizes differ by at
/// most one. When there are more chunks than items the count is clamped to
/// the remaining length and every chunk holds one item.
///
/// ```rust,ignore
/// let chunks: Vec<_> = chunk_indices(10, 4).collect();
/// assert_eq!(chunks, vec![(0, 2), (2, 5), (5, 7), (7, 10)]);
/// ```
pub fn chunk_indices(length: u64, num_chunks: u64) -> ChunkIndices {
    ChunkIndices {
        start: 0,
        remaining: length,
        num_chunks,
    }
}

/// Iterator returned by [`chunk_indices`]
#[derive(Debug, Clone)]
pub struct ChunkIndices {
    start: u64,
    remaining: u64,
    num_chunks: u64,
}

impl Iterator for ChunkIndices {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.num_chunks = self.num_chunks.min(self.remaining);
        if self.num_chunks == 0 {
            return None;
        }

        let chunk_size = div_round_half_even(self.remaining, self.num_chunks);
        let start = self.start;
        self.start += chunk_size;
        self.remaining -= chunk_size;
        self.num_chunks -= 1;
        Some((start, self.start))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.num_chunks.min(self.remaining) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChunkIndices {}

// n / d rounded to the nearest integer, ties to even.
fn div_round_half_even(n: u64, d: u64) -> u64 {
    let quotient = n / d;
    let rem = n % d;
    let rest = d - rem;
    if rem > rest || (rem == rest && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
