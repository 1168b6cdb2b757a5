use tracing::{debug, info};

use crate::chromosome::{Chromosome, Gene};
use crate::continuation::{Continuation, ContinuationChain};
use crate::crossover::CrossoverStrategy;
use crate::error::{GeneticError, Result};
use crate::evolution::builder::EvolutionEngineBuilder;
use crate::evolution::EventHandler;
use crate::mutation::MutationStrategy;
use crate::population::{Population, PopulationCreator};
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// The outcome of a run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<G: Gene> {
    /// The fittest chromosome seen in any generation.
    pub best: Chromosome<G>,
    /// The fitness of `best`.
    pub fitness: f64,
    /// How many generations were bred after the initial population.
    pub generations: usize,
}

/// Drives the generation cycle.
///
/// Each generation the engine selects a breeding pool from the previous population,
/// recombines consecutive groups of the pool, mutates every child, checks every
/// chromosome against its validator, and hands the result to a fresh population from
/// the [`PopulationCreator`]. The run ends when the continuation chain no longer
/// wants to continue, and returns the fittest chromosome ever seen.
///
/// Any error ends the run immediately. Operator output that fails validation or has
/// the wrong size is never repaired or retried.
#[derive(Debug)]
pub struct EvolutionEngine<G: Gene> {
    selection: Box<dyn SelectionStrategy<G> + Send>,
    crossover: Box<dyn CrossoverStrategy<G> + Send>,
    mutation: Box<dyn MutationStrategy<G> + Send>,
    continuation: ContinuationChain<G>,
}

impl<G: Gene> EvolutionEngine<G> {
    pub fn new<S, C, M>(
        selection: S,
        crossover: C,
        mutation: M,
        continuation: ContinuationChain<G>,
    ) -> Self
    where
        S: SelectionStrategy<G> + Send + 'static,
        C: CrossoverStrategy<G> + Send + 'static,
        M: MutationStrategy<G> + Send + 'static,
    {
        Self::from_boxed(
            Box::new(selection),
            Box::new(crossover),
            Box::new(mutation),
            continuation,
        )
    }

    pub(crate) fn from_boxed(
        selection: Box<dyn SelectionStrategy<G> + Send>,
        crossover: Box<dyn CrossoverStrategy<G> + Send>,
        mutation: Box<dyn MutationStrategy<G> + Send>,
        continuation: ContinuationChain<G>,
    ) -> Self {
        Self {
            selection,
            crossover,
            mutation,
            continuation,
        }
    }

    /// Returns a builder for assembling an engine strategy by strategy.
    pub fn builder() -> EvolutionEngineBuilder<G> {
        EvolutionEngineBuilder::new()
    }

    /// Runs the evolution until the continuation chain stops it.
    ///
    /// # Arguments
    ///
    /// * `creator` - Supplies the initial population and the empty populations of
    ///   later generations.
    /// * `handler` - Notified of every population and every new all-time best; also
    ///   answers the progress queries of selection and continuation strategies.
    /// * `rng` - The single source of randomness for the run.
    ///
    /// # Errors
    ///
    /// - `EmptyPopulation` if the initial population is empty.
    /// - `InvalidChromosome` if an initial chromosome or an operator's output fails
    ///   validation.
    /// - `Consistency` if selection or crossover change the number of chromosomes, or
    ///   the creator skips a generation number.
    /// - Any error returned by a strategy or the creator.
    pub fn run<C, H>(
        &mut self,
        creator: &mut C,
        handler: &mut H,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<G>>
    where
        C: PopulationCreator<G> + ?Sized,
        H: EventHandler<G>,
    {
        let mut population = creator.create_initial_population(rng)?;
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        info!(
            generation = population.generation(),
            chromosomes = population.chromosome_count(),
            "starting evolution"
        );

        validate_all(population.chromosomes(), "initial population")?;
        handler.on_new_population(&population);

        let first_generation = population.generation();
        let mut best = population.fittest_chromosome()?.clone();
        handler.on_new_fittest_chromosome(&best);

        self.continuation.on_start();

        loop {
            population = self.next_generation(&population, creator, handler, rng)?;

            let fittest = population.fittest_chromosome()?;
            if fittest.is_fitter_than(&best) {
                best = fittest.clone();
                debug!(
                    generation = population.generation(),
                    fitness = best.fitness(),
                    "new best chromosome"
                );
                handler.on_new_fittest_chromosome(&best);
            }

            debug!(
                generation = population.generation(),
                fittest = population.fittest_chromosome()?.fitness(),
                best = best.fitness(),
                "generation complete"
            );

            if !self.continuation.should_continue(&population, &*handler) {
                break;
            }
        }

        let generations = population.generation() - first_generation;
        info!(generations, best = best.fitness(), "evolution finished");

        Ok(EvolutionResult {
            fitness: best.fitness(),
            best,
            generations,
        })
    }

    fn next_generation<C, H>(
        &mut self,
        previous: &Population<G>,
        creator: &mut C,
        handler: &mut H,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>>
    where
        C: PopulationCreator<G> + ?Sized,
        H: EventHandler<G>,
    {
        let expected = previous.chromosome_count();

        let pool = self.selection.select(previous.chromosomes(), &*handler, rng)?;
        if pool.len() != expected {
            return Err(GeneticError::Consistency(format!(
                "Selection returned {} chromosomes from a population of {}",
                pool.len(),
                expected
            )));
        }

        let offspring = self.recombine(&pool, rng)?;
        if offspring.len() != expected {
            return Err(GeneticError::Consistency(format!(
                "Crossover returned {} chromosomes from a pool of {}",
                offspring.len(),
                expected
            )));
        }
        validate_all(&offspring, "crossover")?;

        let mut mutated = Vec::with_capacity(offspring.len());
        for chromosome in &offspring {
            mutated.push(self.mutation.mutate(chromosome, rng)?);
        }
        validate_all(&mutated, "mutation")?;

        let mut next = creator.create_empty_population()?;
        if next.generation() != previous.generation() + 1 {
            return Err(GeneticError::Consistency(format!(
                "Expected generation {} after {}, got {}",
                previous.generation() + 1,
                previous.generation(),
                next.generation()
            )));
        }
        if !next.is_empty() {
            return Err(GeneticError::Consistency(format!(
                "New population for generation {} already holds {} chromosomes",
                next.generation(),
                next.chromosome_count()
            )));
        }

        next.add_chromosomes(mutated);
        handler.on_new_population(&next);

        Ok(next)
    }

    /// Crosses consecutive groups of the pool. A trailing group too small for the
    /// crossover is carried over unchanged.
    fn recombine(
        &mut self,
        pool: &[Chromosome<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        let arity = self.crossover.parents_required().max(1);
        let mut offspring = Vec::with_capacity(pool.len());

        for parents in pool.chunks(arity) {
            if parents.len() < arity {
                offspring.extend_from_slice(parents);
            } else {
                offspring.extend(self.crossover.crossover(parents, rng)?);
            }
        }

        Ok(offspring)
    }
}

fn validate_all<G: Gene>(chromosomes: &[Chromosome<G>], stage: &str) -> Result<()> {
    match chromosomes.iter().position(|c| !c.is_valid()) {
        Some(index) => Err(GeneticError::InvalidChromosome(format!(
            "{} produced an invalid chromosome at index {}: {:?}",
            stage,
            index,
            chromosomes[index].genes()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::{FitnessFunction, IntegerGene};
    use crate::continuation::GenerationCap;
    use crate::crossover::{GatedCrossover, Pmx};
    use crate::decision::{Always, Never};
    use crate::evolution::{EvolutionOptions, EvolutionProgress, EvolutionTracker};
    use crate::mutation::{Exchange, GatedMutation};
    use crate::population::RandomPermutationCreator;
    use crate::selection::SortedSelection;
    use std::sync::Arc;

    fn fitness() -> Arc<dyn FitnessFunction<IntegerGene>> {
        // Rewards values sitting at their own index.
        Arc::new(|c: &Chromosome<IntegerGene>| {
            c.genes()
                .iter()
                .enumerate()
                .filter(|(i, gene)| gene.value() == *i)
                .count() as f64
        })
    }

    fn creator(size: usize) -> RandomPermutationCreator {
        let options = EvolutionOptions::builder().population_size(size).build();
        RandomPermutationCreator::new(0..6, fitness(), &options).unwrap()
    }

    fn engine(cap: usize) -> EvolutionEngine<IntegerGene> {
        EvolutionEngine::new(
            SortedSelection,
            GatedCrossover::new(Pmx::new(), Always),
            GatedMutation::new(Exchange, Always),
            ContinuationChain::new().with(GenerationCap::new(cap)),
        )
    }

    #[test]
    fn test_run_stops_at_generation_cap() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();

        let result = engine(5)
            .run(&mut creator(10), &mut tracker, &mut rng)
            .unwrap();

        assert_eq!(result.generations, 5);
        assert_eq!(tracker.last_generation(), 5);
        assert_eq!(tracker.best_fitness_history().len(), 6);
        assert_eq!(result.fitness, result.best.fitness());
    }

    #[test]
    fn test_empty_chain_runs_one_generation() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();
        let mut engine: EvolutionEngine<IntegerGene> = EvolutionEngine::new(
            SortedSelection,
            GatedCrossover::new(Pmx::new(), Never),
            GatedMutation::new(Exchange, Never),
            ContinuationChain::new(),
        );

        let result = engine.run(&mut creator(4), &mut tracker, &mut rng).unwrap();
        assert_eq!(result.generations, 1);
    }

    #[test]
    fn test_best_is_never_lost() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();

        let result = engine(20)
            .run(&mut creator(8), &mut tracker, &mut rng)
            .unwrap();

        let history = tracker.best_fitness_history();
        assert!(history.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.fitness, *history.last().unwrap());
    }

    #[test]
    fn test_odd_pool_carries_last_chromosome() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();

        let result = engine(3).run(&mut creator(5), &mut tracker, &mut rng);
        assert!(result.is_ok());
    }
}
