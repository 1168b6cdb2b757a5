use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionProgress;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::sort_fittest_first;

/// A selection strategy that runs a single tournament and fills the whole breeding
/// pool with its winner.
///
/// `tournament_size` distinct chromosomes are drawn at random, sorted by fitness, and
/// the fittest of them is cloned into every slot of the output. This is the strongest
/// selection pressure the library offers: the next generation is bred from one parent.
///
/// A tournament larger than the input uses every chromosome.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::InvalidArgument(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }
}

impl<G: Gene> SelectionStrategy<G> for TournamentSelection {
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        _progress: &dyn EvolutionProgress<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        if chromosomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut contestants: Vec<Chromosome<G>> = rng
            .sample_indices(chromosomes.len(), self.tournament_size)
            .into_iter()
            .map(|idx| chromosomes[idx].clone())
            .collect();
        sort_fittest_first(&mut contestants);

        let winner = &contestants[0];
        Ok(vec![winner.clone(); chromosomes.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::IntegerGene;
    use crate::selection::test_support::{chromosomes, FixedProgress};

    #[test]
    fn test_zero_tournament_size() {
        assert!(matches!(
            TournamentSelection::new(0),
            Err(GeneticError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pool_is_one_winner() {
        let pool = chromosomes(&[4, 9, 1, 7, 3]);
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut selection = TournamentSelection::new(3).unwrap();

        let selected = selection.select(&pool, &FixedProgress(0), &mut rng).unwrap();

        assert_eq!(selected.len(), pool.len());
        assert!(selected.iter().all(|c| c.ptr_eq(&selected[0])));
        assert!(pool.iter().any(|c| c.ptr_eq(&selected[0])));
    }

    #[test]
    fn test_full_tournament_picks_the_fittest() {
        let pool = chromosomes(&[4, 9, 1, 7, 3]);
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut selection = TournamentSelection::new(10).unwrap();

        let selected = selection.select(&pool, &FixedProgress(0), &mut rng).unwrap();

        assert!(selected.iter().all(|c| c.values() == vec![9, 1]));
    }

    #[test]
    fn test_winner_is_fittest_contestant() {
        let pool = chromosomes(&[4, 9, 1, 7, 3, 8, 2]);
        let mut selection = TournamentSelection::new(2).unwrap();

        for seed in 0..20 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let contestants = RandomNumberGenerator::from_seed(seed).sample_indices(pool.len(), 2);
            let expected = contestants
                .iter()
                .map(|&idx| pool[idx].fitness())
                .fold(f64::NEG_INFINITY, f64::max);

            let selected = selection.select(&pool, &FixedProgress(0), &mut rng).unwrap();
            assert_eq!(selected[0].fitness(), expected);
        }
    }

    #[test]
    fn test_empty_input() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let mut selection = TournamentSelection::new(2).unwrap();
        let empty: Vec<Chromosome<IntegerGene>> = Vec::new();
        let result = selection.select(&empty, &FixedProgress(0), &mut rng);

        assert_eq!(result.unwrap_err(), GeneticError::EmptyPopulation);
    }
}
