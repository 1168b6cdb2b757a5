use tracing::{debug, info};

use crate::chromosome::{Chromosome, Gene};
use crate::evolution::options::{EvolutionOptions, LogLevel};
use crate::population::Population;

/// Read-only view of how far a run has progressed.
///
/// Selection and continuation strategies that depend on the run's history query it
/// instead of holding a reference to the engine.
pub trait EvolutionProgress<G: Gene> {
    /// Generation of the most recent population reported to the handler.
    fn last_generation(&self) -> usize;

    /// The fittest chromosome seen in any reported population.
    fn fittest_chromosome_so_far(&self) -> Option<&Chromosome<G>>;
}

/// Receives the engine's notifications.
pub trait EventHandler<G: Gene>: EvolutionProgress<G> {
    /// Called once for the initial population and once for every new generation.
    fn on_new_population(&mut self, population: &Population<G>);

    /// Called when the engine records a new all-time best chromosome.
    fn on_new_fittest_chromosome(&mut self, _chromosome: &Chromosome<G>) {}
}

/// Event handler that remembers the run's progress and logs it.
///
/// Besides answering [`EvolutionProgress`] queries it keeps, for every reported
/// population, the best fitness seen up to that point.
#[derive(Debug, Clone)]
pub struct EvolutionTracker<G: Gene> {
    log_level: LogLevel,
    last_generation: usize,
    fittest: Option<Chromosome<G>>,
    best_fitness_history: Vec<f64>,
}

impl<G: Gene> EvolutionTracker<G> {
    pub fn new(options: &EvolutionOptions) -> Self {
        Self {
            log_level: options.get_log_level(),
            last_generation: 0,
            fittest: None,
            best_fitness_history: Vec::new(),
        }
    }

    /// Best fitness seen so far, recorded once per reported population.
    pub fn best_fitness_history(&self) -> &[f64] {
        &self.best_fitness_history
    }
}

impl<G: Gene> Default for EvolutionTracker<G> {
    fn default() -> Self {
        Self::new(&EvolutionOptions::default())
    }
}

impl<G: Gene> EvolutionProgress<G> for EvolutionTracker<G> {
    fn last_generation(&self) -> usize {
        self.last_generation
    }

    fn fittest_chromosome_so_far(&self) -> Option<&Chromosome<G>> {
        self.fittest.as_ref()
    }
}

impl<G: Gene> EventHandler<G> for EvolutionTracker<G> {
    fn on_new_population(&mut self, population: &Population<G>) {
        self.last_generation = population.generation();

        if let Ok(candidate) = population.fittest_chromosome() {
            let improved = self
                .fittest
                .as_ref()
                .map_or(true, |best| candidate.is_fitter_than(best));
            if improved {
                self.fittest = Some(candidate.clone());
            }
        }

        let best = self
            .fittest
            .as_ref()
            .map_or(f64::NEG_INFINITY, Chromosome::fitness);
        self.best_fitness_history.push(best);

        match self.log_level {
            LogLevel::Minimal => info!(
                generation = population.generation(),
                chromosomes = population.chromosome_count(),
                best_fitness = best,
                "new population"
            ),
            LogLevel::Verbose => {
                for chromosome in population.chromosomes() {
                    info!(
                        generation = population.generation(),
                        fitness = chromosome.fitness(),
                        genes = ?chromosome.genes(),
                        "chromosome"
                    );
                }
            }
            LogLevel::None => {}
        }
    }

    fn on_new_fittest_chromosome(&mut self, chromosome: &Chromosome<G>) {
        debug!(
            generation = self.last_generation,
            fitness = chromosome.fitness(),
            "new fittest chromosome"
        );
    }
}
