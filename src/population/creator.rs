use std::sync::Arc;

use tracing::debug;

use crate::chromosome::{
    Chromosome, ChromosomeValidator, FitnessFunction, IntegerGene, PermutationValidator,
};
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionOptions;
use crate::population::{Population, PopulationCreator};
use crate::rng::RandomNumberGenerator;

/// Creates populations of random permutations over a fixed alphabet.
///
/// Every chromosome it creates carries the given fitness function and a
/// [`PermutationValidator`] for the alphabet, so the engine rejects any operator
/// output that is not a permutation.
pub struct RandomPermutationCreator {
    validator: Arc<PermutationValidator>,
    fitness_function: Arc<dyn FitnessFunction<IntegerGene>>,
    population_size: usize,
    last_generation: Option<usize>,
}

impl RandomPermutationCreator {
    /// Creates a creator for permutations of `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the population size is zero or the alphabet is
    /// empty or contains duplicates.
    pub fn new<I>(
        alphabet: I,
        fitness_function: Arc<dyn FitnessFunction<IntegerGene>>,
        options: &EvolutionOptions,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        if options.get_population_size() == 0 {
            return Err(GeneticError::InvalidArgument(
                "Population size cannot be zero".to_string(),
            ));
        }

        Ok(Self {
            validator: Arc::new(PermutationValidator::new(alphabet)?),
            fitness_function,
            population_size: options.get_population_size(),
            last_generation: None,
        })
    }

    pub fn validator(&self) -> &Arc<PermutationValidator> {
        &self.validator
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    fn random_chromosome(
        &self,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<IntegerGene>> {
        let mut values = self.validator.alphabet().to_vec();
        rng.shuffle(&mut values);

        let validator: Arc<dyn ChromosomeValidator<IntegerGene>> = self.validator.clone();
        Chromosome::new_validated(
            values.into_iter().map(IntegerGene).collect(),
            Arc::clone(&self.fitness_function),
            validator,
        )
    }
}

impl PopulationCreator<IntegerGene> for RandomPermutationCreator {
    fn create_initial_population(
        &mut self,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<IntegerGene>> {
        let chromosomes = (0..self.population_size)
            .map(|_| self.random_chromosome(rng))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            population_size = self.population_size,
            genes = self.validator.alphabet().len(),
            "created initial population"
        );

        self.last_generation = Some(0);
        Ok(Population::with_chromosomes(0, chromosomes))
    }

    fn create_empty_population(&mut self) -> Result<Population<IntegerGene>> {
        let generation = match self.last_generation {
            Some(last) => last + 1,
            None => {
                return Err(GeneticError::Consistency(
                    "An empty population was requested before the initial one".to_string(),
                ))
            }
        };

        self.last_generation = Some(generation);
        Ok(Population::new(generation))
    }
}
