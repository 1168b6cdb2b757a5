use tracing::trace;

use crate::decision::DecisionMaker;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Resolution of a percentage draw: hundredths of a percent.
const DRAW_RESOLUTION: u32 = 10_000;

fn check_percentage(name: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(GeneticError::InvalidArgument(format!(
            "{} must be within [0, 100], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Fires with a constant probability given in percent.
///
/// Each call draws a value in `(0, 10000]` (hundredths of a percent) and fires when
/// the draw is within the percentage, so 0 never fires and 100 always does.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantPercentage {
    percentage: f64,
}

impl ConstantPercentage {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `percentage` is outside `[0, 100]`.
    pub fn new(percentage: f64) -> Result<Self> {
        check_percentage("Percentage", percentage)?;
        Ok(Self { percentage })
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    fn set_percentage(&mut self, percentage: f64) {
        self.percentage = percentage.clamp(0.0, 100.0);
    }
}

impl DecisionMaker for ConstantPercentage {
    fn should_fire(&mut self, rng: &mut RandomNumberGenerator) -> bool {
        let draw = rng.gen_range(1..=DRAW_RESOLUTION);
        f64::from(draw) <= self.percentage * 100.0
    }
}

/// Direction in which a [`DriftingPercentage`] moves.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    Increasing,
    Decreasing,
}

/// A percentage gate whose percentage moves toward a bound over time.
///
/// Every `change_step` calls the percentage is nudged by `delta` toward the bound and
/// clamped to it, then the call is answered like a [`ConstantPercentage`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DriftingPercentage {
    current: ConstantPercentage,
    drift: Drift,
    delta: f64,
    bound: f64,
    change_step: usize,
    calls: usize,
}

impl DriftingPercentage {
    /// Creates a gate that rises from `initial` toward `max`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any percentage is outside `[0, 100]`, `delta` is not
    /// positive, `change_step` is zero, or `max < initial`.
    pub fn increasing(initial: f64, delta: f64, max: f64, change_step: usize) -> Result<Self> {
        Self::build(initial, delta, max, change_step, Drift::Increasing)
    }

    /// Creates a gate that falls from `initial` toward `min`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any percentage is outside `[0, 100]`, `delta` is not
    /// positive, `change_step` is zero, or `min > initial`.
    pub fn decreasing(initial: f64, delta: f64, min: f64, change_step: usize) -> Result<Self> {
        Self::build(initial, delta, min, change_step, Drift::Decreasing)
    }

    fn build(
        initial: f64,
        delta: f64,
        bound: f64,
        change_step: usize,
        drift: Drift,
    ) -> Result<Self> {
        let current = ConstantPercentage::new(initial)?;
        check_percentage("Bound", bound)?;

        if !(delta > 0.0 && delta <= 100.0) {
            return Err(GeneticError::InvalidArgument(format!(
                "Delta must be within (0, 100], got {}",
                delta
            )));
        }
        if change_step == 0 {
            return Err(GeneticError::InvalidArgument(
                "Change step must be at least 1".to_string(),
            ));
        }

        let wrong_side = match drift {
            Drift::Increasing => bound < initial,
            Drift::Decreasing => bound > initial,
        };
        if wrong_side {
            return Err(GeneticError::InvalidArgument(format!(
                "Bound {} lies on the wrong side of the initial percentage {} for {:?} drift",
                bound, initial, drift
            )));
        }

        Ok(Self {
            current,
            drift,
            delta,
            bound,
            change_step,
            calls: 0,
        })
    }

    pub fn percentage(&self) -> f64 {
        self.current.percentage()
    }

    pub fn drift(&self) -> Drift {
        self.drift
    }
}

impl DecisionMaker for DriftingPercentage {
    fn should_fire(&mut self, rng: &mut RandomNumberGenerator) -> bool {
        self.calls += 1;
        if self.calls % self.change_step == 0 {
            let percentage = self.current.percentage();
            let next = match self.drift {
                Drift::Increasing => (percentage + self.delta).min(self.bound),
                Drift::Decreasing => (percentage - self.delta).max(self.bound),
            };
            self.current.set_percentage(next);
            trace!(from = percentage, to = next, "percentage drifted");
        }
        self.current.should_fire(rng)
    }
}
