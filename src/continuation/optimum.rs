use tracing::warn;

use crate::chromosome::Gene;
use crate::continuation::Continuation;
use crate::evolution::EvolutionProgress;
use crate::population::Population;

/// Continues while the best fitness seen so far is strictly below a known optimum.
///
/// The best fitness comes from the run's [`EvolutionProgress`]. A best fitness above
/// the optimum means the fitness function and the optimum disagree; this is logged
/// once as a warning and the run stops as if the optimum had been reached.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct KnownOptimum {
    target: f64,
    warned: bool,
}

impl KnownOptimum {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            warned: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<G: Gene> Continuation<G> for KnownOptimum {
    fn should_continue(
        &mut self,
        _population: &Population<G>,
        progress: &dyn EvolutionProgress<G>,
    ) -> bool {
        let Some(best) = progress.fittest_chromosome_so_far() else {
            return true;
        };
        let fitness = best.fitness();

        if fitness > self.target && !self.warned {
            warn!(
                fitness,
                target = self.target,
                "best fitness exceeds the known optimum"
            );
            self.warned = true;
        }

        fitness < self.target
    }
}
