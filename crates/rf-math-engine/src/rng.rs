//! Random sources for reel stops and picks
//!
//! - [`LiveRng`]: ChaCha8 generator, seeded or from OS entropy
//! - [`ReplayRng`]: fixed sequence replayed in order, for reproducible rounds

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random source failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RngError {
    #[error("Random source exhausted after {consumed} values")]
    Exhausted { consumed: usize },

    #[error("Random draw requested from an empty range")]
    EmptyRange,

    #[error("Random source returned {value}, outside [0, {bound})")]
    OutOfRange { value: usize, bound: usize },
}

/// Bounded random integer generator
pub trait RandomSource {
    /// Next value in `[0, bound)`
    ///
    /// Implementations must stay inside the bound. Callers that index with
    /// the value check it and report [`RngError::OutOfRange`] otherwise.
    fn next(&mut self, bound: usize) -> Result<usize, RngError>;
}

/// Live generator
#[derive(Debug, Clone)]
pub struct LiveRng {
    rng: ChaCha8Rng,
}

impl LiveRng {
    /// Deterministic generator for the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Create with optional seed (None = OS entropy)
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for LiveRng {
    fn next(&mut self, bound: usize) -> Result<usize, RngError> {
        if bound == 0 {
            return Err(RngError::EmptyRange);
        }
        Ok(self.rng.random_range(0..bound))
    }
}

/// Replays a fixed sequence of values
///
/// Each value is reduced modulo the requested bound. Once the sequence is
/// consumed every draw fails with [`RngError::Exhausted`]; it never wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRng {
    values: Vec<usize>,
    cursor: usize,
}

impl ReplayRng {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Values not yet drawn
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    /// Values drawn so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplayRng {
    fn next(&mut self, bound: usize) -> Result<usize, RngError> {
        if bound == 0 {
            return Err(RngError::EmptyRange);
        }
        let value = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or(RngError::Exhausted {
                consumed: self.cursor,
            })?;
        self.cursor += 1;
        Ok(value % bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_in_order_then_exhausted() {
        let mut rng = ReplayRng::new(vec![0, 2, 1]);
        assert_eq!(rng.next(3), Ok(0));
        assert_eq!(rng.next(3), Ok(2));
        assert_eq!(rng.remaining(), 1);
        assert_eq!(rng.next(3), Ok(1));
        assert_eq!(rng.next(3), Err(RngError::Exhausted { consumed: 3 }));
        // Stays exhausted
        assert_eq!(rng.next(3), Err(RngError::Exhausted { consumed: 3 }));
    }

    #[test]
    fn test_replay_reduces_modulo_bound() {
        let mut rng = ReplayRng::new(vec![7, 4]);
        assert_eq!(rng.next(5), Ok(2));
        assert_eq!(rng.next(2), Ok(0));
    }

    #[test]
    fn test_zero_bound() {
        let mut replay = ReplayRng::new(vec![1]);
        assert_eq!(replay.next(0), Err(RngError::EmptyRange));
        assert_eq!(replay.consumed(), 0);

        let mut live = LiveRng::seeded(1);
        assert_eq!(live.next(0), Err(RngError::EmptyRange));
    }

    #[test]
    fn test_live_determinism_and_bounds() {
        let mut rng1 = LiveRng::seeded(42);
        let mut rng2 = LiveRng::seeded(42);

        for _ in 0..100 {
            let a = rng1.next(37).unwrap();
            assert!(a < 37);
            assert_eq!(a, rng2.next(37).unwrap());
        }
    }
}
