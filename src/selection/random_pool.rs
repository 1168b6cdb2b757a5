use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionProgress;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that ignores fitness entirely.
///
/// `pool_size` chromosomes are drawn uniformly by index (the same chromosome may be
/// drawn more than once) to form a small pool, and every output slot is then filled
/// by another uniform draw from that pool.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RandomPoolSelection {
    pool_size: usize,
}

impl RandomPoolSelection {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `pool_size` is 0.
    pub fn new(pool_size: usize) -> Result<Self> {
        if pool_size < 1 {
            return Err(GeneticError::InvalidArgument(
                "Pool size must be at least 1".to_string(),
            ));
        }

        Ok(Self { pool_size })
    }
}

impl<G: Gene> SelectionStrategy<G> for RandomPoolSelection {
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        _progress: &dyn EvolutionProgress<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        if chromosomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let pool: Vec<&Chromosome<G>> = (0..self.pool_size)
            .map(|_| &chromosomes[rng.gen_index(chromosomes.len())])
            .collect();

        Ok((0..chromosomes.len())
            .map(|_| pool[rng.gen_index(pool.len())].clone())
            .collect())
    }
}
