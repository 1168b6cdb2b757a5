//! # Population
//!
//! A [`Population`] is the set of chromosomes alive at one generation. It remembers
//! its fittest member after the first lookup; any call that changes the chromosome
//! collection drops that memo so the next lookup scans again.
//!
//! Populations are produced by a [`PopulationCreator`]: generation 0 comes fully
//! populated from [`PopulationCreator::create_initial_population`], every later
//! generation starts empty from [`PopulationCreator::create_empty_population`] and is
//! filled by the engine.

mod creator;

use std::sync::OnceLock;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{check_index, GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use creator::RandomPermutationCreator;

/// Supplies the populations of a run and owns generation numbering.
pub trait PopulationCreator<G: Gene> {
    /// Creates the fully populated generation 0.
    fn create_initial_population(&mut self, rng: &mut RandomNumberGenerator)
        -> Result<Population<G>>;

    /// Creates an empty population whose generation is one past the last one handed out.
    fn create_empty_population(&mut self) -> Result<Population<G>>;
}

/// The chromosomes alive at a given generation.
#[derive(Debug, Clone)]
pub struct Population<G: Gene> {
    generation: usize,
    chromosomes: Vec<Chromosome<G>>,
    /// Index of the fittest chromosome, filled on demand.
    fittest: OnceLock<usize>,
}

impl<G: Gene> Population<G> {
    /// Creates an empty population at `generation`.
    pub fn new(generation: usize) -> Self {
        Self::with_chromosomes(generation, Vec::new())
    }

    /// Creates a population at `generation` holding `chromosomes`.
    pub fn with_chromosomes(generation: usize, chromosomes: Vec<Chromosome<G>>) -> Self {
        Self {
            generation,
            chromosomes,
            fittest: OnceLock::new(),
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn chromosome_count(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Returns the chromosome at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= chromosome_count()`.
    pub fn chromosome(&self, index: usize) -> Result<&Chromosome<G>> {
        check_index(index, self.chromosomes.len())?;
        Ok(&self.chromosomes[index])
    }

    pub fn chromosomes(&self) -> &[Chromosome<G>] {
        &self.chromosomes
    }

    pub fn into_chromosomes(self) -> Vec<Chromosome<G>> {
        self.chromosomes
    }

    pub fn add_chromosome(&mut self, chromosome: Chromosome<G>) {
        self.chromosomes.push(chromosome);
        self.invalidate();
    }

    pub fn add_chromosomes<I>(&mut self, chromosomes: I)
    where
        I: IntoIterator<Item = Chromosome<G>>,
    {
        self.chromosomes.extend(chromosomes);
        self.invalidate();
    }

    /// Replaces the chromosome at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= chromosome_count()`.
    pub fn replace_chromosome(
        &mut self,
        index: usize,
        chromosome: Chromosome<G>,
    ) -> Result<Chromosome<G>> {
        check_index(index, self.chromosomes.len())?;
        let previous = std::mem::replace(&mut self.chromosomes[index], chromosome);
        self.invalidate();
        Ok(previous)
    }

    pub fn clear(&mut self) {
        self.chromosomes.clear();
        self.invalidate();
    }

    /// Returns the fittest chromosome. The first of several equally fit ones wins.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if there are no chromosomes.
    pub fn fittest_chromosome(&self) -> Result<&Chromosome<G>> {
        if self.chromosomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let index = *self.fittest.get_or_init(|| {
            let mut best = 0;
            for (i, chromosome) in self.chromosomes.iter().enumerate().skip(1) {
                if chromosome.is_fitter_than(&self.chromosomes[best]) {
                    best = i;
                }
            }
            best
        });

        Ok(&self.chromosomes[index])
    }

    fn invalidate(&mut self) {
        self.fittest.take();
    }
}
