use tracing::trace;

use crate::decision::DecisionMaker;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Fires exactly once in every window of `of` calls.
///
/// Within each window the call with zero-based offset `every - 1` fires, so
/// `FixedRate::new(1, 3)` fires on calls 0, 3, 6, ... and `FixedRate::new(2, 4)` on
/// calls 1, 5, 9, ...
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRate {
    every: usize,
    of: usize,
    calls: usize,
}

impl FixedRate {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `every` or `of` is zero, or `every > of`.
    pub fn new(every: usize, of: usize) -> Result<Self> {
        if every == 0 || of == 0 {
            return Err(GeneticError::InvalidArgument(format!(
                "Fixed rate needs positive values, got {} of {}",
                every, of
            )));
        }
        if every > of {
            return Err(GeneticError::InvalidArgument(format!(
                "Fixed rate cannot fire on call {} of a window of {}",
                every, of
            )));
        }

        Ok(Self {
            every,
            of,
            calls: 0,
        })
    }

    /// Number of calls answered so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DecisionMaker for FixedRate {
    fn should_fire(&mut self, _rng: &mut RandomNumberGenerator) -> bool {
        let fire = self.calls % self.of == self.every - 1;
        trace!(call = self.calls, fire, "fixed rate decision");
        self.calls += 1;
        fire
    }
}
