//! # Selection Strategies
//!
//! A selection strategy takes the chromosomes of the current population and returns
//! the breeding pool for the next generation. The pool always has exactly as many
//! entries as the input; the engine treats any other length as an internal error.
//!
//! Entries of the pool may repeat. Repeated entries are clones of one chromosome and
//! share its cached fitness.

pub mod alternating;
pub mod random_pool;
pub mod roulette;
pub mod selection_strategy;
pub mod sorted;
pub mod tournament;

use std::cmp::Ordering;

use crate::chromosome::{Chromosome, Gene};

pub use alternating::{ActiveSelection, AlternatingSelection};
pub use random_pool::RandomPoolSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use sorted::{SortedSelection, TopRandomSelection};
pub use tournament::TournamentSelection;

/// Orders fitness values ascending, placing `NaN` below every number.
pub(crate) fn compare_fitness(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| {
        if a.is_nan() && b.is_nan() {
            Ordering::Equal
        } else if a.is_nan() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    })
}

/// Stable sort, fittest first.
pub(crate) fn sort_fittest_first<G: Gene>(chromosomes: &mut [Chromosome<G>]) {
    chromosomes.sort_by(|a, b| compare_fitness(b.fitness(), a.fitness()));
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::chromosome::{Chromosome, FitnessFunction, IntegerGene};
    use crate::evolution::EvolutionProgress;

    /// Chromosomes whose fitness is their first gene.
    pub fn chromosomes(heads: &[usize]) -> Vec<Chromosome<IntegerGene>> {
        let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
            Arc::new(|c: &Chromosome<IntegerGene>| c.genes()[0].value() as f64);
        heads
            .iter()
            .enumerate()
            .map(|(i, &head)| Chromosome::from_values(vec![head, i], Arc::clone(&fitness)).unwrap())
            .collect()
    }

    /// A progress view frozen at one generation.
    pub struct FixedProgress(pub usize);

    impl EvolutionProgress<IntegerGene> for FixedProgress {
        fn last_generation(&self) -> usize {
            self.0
        }

        fn fittest_chromosome_so_far(&self) -> Option<&Chromosome<IntegerGene>> {
            None
        }
    }
}
