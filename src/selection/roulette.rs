use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionProgress;
use crate::rng::RandomNumberGenerator;
use crate::selection::compare_fitness;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects chromosomes through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) fills every
/// slot of the breeding pool with a chromosome drawn with probability proportional to
/// its fitness. The chromosomes are sorted ascending by fitness before the cumulative
/// distribution is built, so the widest buckets sit at the top of the wheel.
///
/// This strategy requires every fitness value to be finite and non-negative. A
/// population whose total fitness is zero is drawn from uniformly.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use permga::chromosome::{Chromosome, FitnessFunction, IntegerGene};
/// use permga::evolution::EvolutionTracker;
/// use permga::rng::RandomNumberGenerator;
/// use permga::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
///     Arc::new(|c: &Chromosome<IntegerGene>| c.values()[0] as f64 + 1.0);
/// let pool = vec![
///     Chromosome::from_values(vec![0, 1], Arc::clone(&fitness)).unwrap(),
///     Chromosome::from_values(vec![1, 0], Arc::clone(&fitness)).unwrap(),
/// ];
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let mut selection = RouletteWheelSelection::new();
/// let tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();
/// let selected = selection.select(&pool, &tracker, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Cumulative distribution over fitness values already sorted ascending.
    ///
    /// The last bucket always ends at exactly 1.0.
    fn cumulative_probabilities(fitness: &[f64]) -> Result<Vec<f64>> {
        if fitness.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(GeneticError::InvalidArgument(
                "Roulette wheel selection requires finite, non-negative fitness values"
                    .to_string(),
            ));
        }

        let count = fitness.len() as f64;
        let sum: f64 = fitness.iter().sum();

        let mut cumulative = 0.0;
        let mut probs: Vec<f64> = fitness
            .iter()
            .map(|&f| {
                cumulative += if sum > 0.0 { f / sum } else { 1.0 / count };
                cumulative
            })
            .collect();

        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        Ok(probs)
    }

    /// Index of the first bucket whose upper bound lies above `r`.
    fn spin(cumulative_probs: &[f64], r: f64) -> Option<usize> {
        cumulative_probs.iter().position(|&prob| r < prob)
    }
}

impl<G: Gene> SelectionStrategy<G> for RouletteWheelSelection {
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        _progress: &dyn EvolutionProgress<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        if chromosomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut wheel = chromosomes.to_vec();
        wheel.sort_by(|a, b| compare_fitness(a.fitness(), b.fitness()));

        let fitness: Vec<f64> = wheel.iter().map(Chromosome::fitness).collect();
        let cumulative_probs = Self::cumulative_probabilities(&fitness)?;

        let selected: Vec<Chromosome<G>> = (0..chromosomes.len())
            .filter_map(|_| Self::spin(&cumulative_probs, rng.gen_unit()))
            .map(|idx| wheel[idx].clone())
            .collect();

        if selected.len() != chromosomes.len() {
            return Err(GeneticError::Consistency(format!(
                "Roulette wheel selected {} chromosomes from a population of {}",
                selected.len(),
                chromosomes.len()
            )));
        }

        Ok(selected)
    }
}
