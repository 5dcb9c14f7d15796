//! Index selection for picking the secret word.

/// Source of uniformly distributed indices in `0..len`.
pub trait RandomSource {
    /// `len` is always non-zero when called by the engine.
    fn index(&mut self, len: usize) -> usize;
}

/// OS / browser entropy via `getrandom` (`crypto.getRandomValues` on wasm32).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let mut buf = [0u8; 8];
        if let Err(err) = getrandom::getrandom(&mut buf) {
            log::warn!("getrandom failed ({err}); falling back to first word");
            return 0;
        }
        uniform_below(u64::from_le_bytes(buf), len)
    }
}

/// Maps 64 random bits onto `0..len`. The modulo bias is below 2^-50 for any
/// realistic word list length.
fn uniform_below(bits: u64, len: usize) -> usize {
    (bits % len as u64) as usize
}

/// Always picks the same index (clamped to the list).
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Cycles through a scripted list of indices, wrapping each into range.
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    picks: Vec<usize>,
    next: usize,
}

impl SequenceIndex {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self { picks: picks.into(), next: 0 }
    }
}

impl RandomSource for SequenceIndex {
    fn index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_stays_in_range() {
        let mut rng = OsRandom;
        for _ in 0..200 {
            assert!(rng.index(8) < 8);
        }
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn fixed_index_clamps() {
        assert_eq!(FixedIndex(3).index(8), 3);
        assert_eq!(FixedIndex(30).index(8), 7);
    }

    #[test]
    fn sequence_wraps() {
        let mut seq = SequenceIndex::new(vec![1, 9]);
        assert_eq!(seq.index(8), 1);
        assert_eq!(seq.index(8), 1);
        assert_eq!(seq.index(8), 1);
        assert_eq!(SequenceIndex::new(Vec::new()).index(8), 0);
    }

    #[test]
    fn uniform_below_covers_range() {
        assert_eq!(uniform_below(0, 8), 0);
        assert_eq!(uniform_below(15, 8), 7);
        assert_eq!(uniform_below(u64::MAX, 2), 1);
    }
}
