use std::fmt::Debug;

use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;
use crate::evolution::EvolutionProgress;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies choose which chromosomes of the current population make it
/// into the breeding pool. Different strategies give different selection pressure.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use permga::chromosome::{Chromosome, FitnessFunction, IntegerGene};
/// use permga::evolution::EvolutionTracker;
/// use permga::rng::RandomNumberGenerator;
/// use permga::selection::{SelectionStrategy, SortedSelection};
///
/// let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
///     Arc::new(|c: &Chromosome<IntegerGene>| c.genes()[0].value() as f64);
/// let chromosomes = vec![
///     Chromosome::from_values(vec![0, 1], Arc::clone(&fitness)).unwrap(),
///     Chromosome::from_values(vec![1, 0], fitness).unwrap(),
/// ];
///
/// let mut rng = RandomNumberGenerator::from_seed(0);
/// let tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();
/// let selected = SortedSelection.select(&chromosomes, &tracker, &mut rng).unwrap();
///
/// assert_eq!(selected[0].values(), vec![1, 0]);
/// ```
pub trait SelectionStrategy<G: Gene>: Debug {
    /// Returns the breeding pool for the next generation.
    ///
    /// # Arguments
    ///
    /// * `chromosomes` - The chromosomes of the current population.
    /// * `progress` - The run's progress, for strategies that change over time.
    /// * `rng` - The run's random number generator.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `chromosomes` is empty, or an error specific to
    /// the strategy.
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        progress: &dyn EvolutionProgress<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>>;
}

impl<G: Gene, S: SelectionStrategy<G> + ?Sized> SelectionStrategy<G> for Box<S> {
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        progress: &dyn EvolutionProgress<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        (**self).select(chromosomes, progress, rng)
    }
}
