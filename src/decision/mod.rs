//! # Decision Makers
//!
//! A [`DecisionMaker`] is a probabilistic gate that answers "should the next operator
//! call fire?". Crossover and mutation wrappers consult one before each call and pass
//! their input through unchanged when it declines.
//!
//! Decision makers are stateful: rate based ones count calls, drifting ones move their
//! percentage over time. Their answers therefore depend on call order.
//!
//! ## Example
//!
//! ```rust
//! use permga::decision::{DecisionMaker, FixedRate};
//! use permga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(0);
//! let mut every_third = FixedRate::new(1, 3).unwrap();
//!
//! let fired: Vec<bool> = (0..6).map(|_| every_third.should_fire(&mut rng)).collect();
//! assert_eq!(fired, vec![true, false, false, true, false, false]);
//! ```

mod fixed_rate;
mod percentage;

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

pub use fixed_rate::FixedRate;
pub use percentage::{ConstantPercentage, Drift, DriftingPercentage};

/// A gate deciding whether an operator fires on the current call.
pub trait DecisionMaker: Debug + Send {
    fn should_fire(&mut self, rng: &mut RandomNumberGenerator) -> bool;
}

/// Fires on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl DecisionMaker for Always {
    fn should_fire(&mut self, _rng: &mut RandomNumberGenerator) -> bool {
        true
    }
}

/// Never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl DecisionMaker for Never {
    fn should_fire(&mut self, _rng: &mut RandomNumberGenerator) -> bool {
        false
    }
}

impl<D: DecisionMaker + ?Sized> DecisionMaker for Box<D> {
    fn should_fire(&mut self, rng: &mut RandomNumberGenerator) -> bool {
        (**self).should_fire(rng)
    }
}

/// How often a gated operator was asked to run and how often its gate let it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorStats {
    pub tries: u64,
    pub executions: u64,
}

impl OperatorStats {
    /// Consults `decision_maker` and records the outcome.
    pub(crate) fn gate(
        &mut self,
        decision_maker: &mut dyn DecisionMaker,
        rng: &mut RandomNumberGenerator,
    ) -> bool {
        self.tries += 1;
        let fired = decision_maker.should_fire(rng);
        if fired {
            self.executions += 1;
        }
        fired
    }

    /// Fraction of tries that executed, or 0 before the first try.
    pub fn execution_rate(&self) -> f64 {
        if self.tries == 0 {
            0.0
        } else {
            self.executions as f64 / self.tries as f64
        }
    }
}
