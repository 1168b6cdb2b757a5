use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionProgress;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::sort_fittest_first;

/// A selection strategy that returns every chromosome, fittest first.
///
/// Nothing is discarded; the strategy only fixes the pairing order, so the fittest
/// chromosomes are crossed with each other.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedSelection;

impl<G: Gene> SelectionStrategy<G> for SortedSelection {
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        _progress: &dyn EvolutionProgress<G>,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        if chromosomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut selected = chromosomes.to_vec();
        sort_fittest_first(&mut selected);
        Ok(selected)
    }
}

/// A selection strategy that breeds only from the fittest chromosomes.
///
/// The input is sorted by fitness, everything but the best `elite_size` is discarded,
/// and every output slot is filled by a uniform draw from the survivors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TopRandomSelection {
    elite_size: usize,
}

impl TopRandomSelection {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `elite_size` is 0.
    pub fn new(elite_size: usize) -> Result<Self> {
        if elite_size < 1 {
            return Err(GeneticError::InvalidArgument(
                "Elite size must be at least 1".to_string(),
            ));
        }

        Ok(Self { elite_size })
    }
}

impl<G: Gene> SelectionStrategy<G> for TopRandomSelection {
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        _progress: &dyn EvolutionProgress<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        if chromosomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut elite = chromosomes.to_vec();
        sort_fittest_first(&mut elite);
        elite.truncate(self.elite_size);

        Ok((0..chromosomes.len())
            .map(|_| elite[rng.gen_index(elite.len())].clone())
            .collect())
    }
}
