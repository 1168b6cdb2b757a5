//! # Chromosome
//!
//! A [`Chromosome`] is one candidate solution: an ordered, fixed-length sequence of
//! [`Gene`]s together with the [`FitnessFunction`] that scores it and an optional
//! [`ChromosomeValidator`].
//!
//! Chromosomes are immutable. Operators never change one in place; they build a new
//! gene sequence and derive a fresh chromosome from a template with
//! [`Chromosome::with_genes`], which carries the template's fitness function and
//! validator over.
//!
//! Fitness is computed on first use and cached. Cloning a chromosome is cheap and the
//! clone shares both the genes and the cached fitness with the original, so clones
//! behave like references to the same solution.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use permga::chromosome::{Chromosome, FitnessFunction, IntegerGene};
//!
//! let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
//!     Arc::new(|c: &Chromosome<IntegerGene>| c.genes()[0].value() as f64);
//!
//! let chromosome = Chromosome::from_values(vec![2, 0, 1], fitness).unwrap();
//! assert_eq!(chromosome.gene_count(), 3);
//! assert_eq!(chromosome.fitness(), 2.0);
//! ```

mod gene;
mod permutation;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::error::{check_index, GeneticError, Result};

pub use gene::{Gene, IntegerGene, RealGene};
pub use permutation::PermutationValidator;

/// Maps a chromosome to a real-valued quality score. Higher is better.
///
/// Any `Fn(&Chromosome<G>) -> f64` closure is a fitness function.
pub trait FitnessFunction<G: Gene>: Send + Sync {
    fn fitness(&self, chromosome: &Chromosome<G>) -> f64;
}

impl<G, F> FitnessFunction<G> for F
where
    G: Gene,
    F: Fn(&Chromosome<G>) -> f64 + Send + Sync,
{
    fn fitness(&self, chromosome: &Chromosome<G>) -> f64 {
        self(chromosome)
    }
}

/// Decides whether a chromosome encodes an admissible solution.
///
/// Any `Fn(&Chromosome<G>) -> bool` closure is a validator.
pub trait ChromosomeValidator<G: Gene>: Send + Sync {
    fn is_valid(&self, chromosome: &Chromosome<G>) -> bool;
}

impl<G, F> ChromosomeValidator<G> for F
where
    G: Gene,
    F: Fn(&Chromosome<G>) -> bool + Send + Sync,
{
    fn is_valid(&self, chromosome: &Chromosome<G>) -> bool {
        self(chromosome)
    }
}

struct ChromosomeInner<G: Gene> {
    genes: Vec<G>,
    fitness_function: Arc<dyn FitnessFunction<G>>,
    validator: Option<Arc<dyn ChromosomeValidator<G>>>,
    fitness: OnceLock<f64>,
}

/// An immutable candidate solution with a lazily cached fitness.
///
/// Equality and hashing consider the gene sequence only.
pub struct Chromosome<G: Gene> {
    inner: Arc<ChromosomeInner<G>>,
}

impl<G: Gene> Chromosome<G> {
    /// Creates a chromosome without a validator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `genes` is empty.
    pub fn new(genes: Vec<G>, fitness_function: Arc<dyn FitnessFunction<G>>) -> Result<Self> {
        Self::build(genes, fitness_function, None)
    }

    /// Creates a chromosome whose validity is decided by `validator`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `genes` is empty.
    pub fn new_validated(
        genes: Vec<G>,
        fitness_function: Arc<dyn FitnessFunction<G>>,
        validator: Arc<dyn ChromosomeValidator<G>>,
    ) -> Result<Self> {
        Self::build(genes, fitness_function, Some(validator))
    }

    fn build(
        genes: Vec<G>,
        fitness_function: Arc<dyn FitnessFunction<G>>,
        validator: Option<Arc<dyn ChromosomeValidator<G>>>,
    ) -> Result<Self> {
        if genes.is_empty() {
            return Err(GeneticError::InvalidArgument(
                "A chromosome needs at least one gene".to_string(),
            ));
        }

        Ok(Self {
            inner: Arc::new(ChromosomeInner {
                genes,
                fitness_function,
                validator,
                fitness: OnceLock::new(),
            }),
        })
    }

    /// Builds a new chromosome from `genes` that shares this chromosome's fitness
    /// function and validator.
    pub fn with_genes(&self, genes: Vec<G>) -> Result<Self> {
        Self::build(
            genes,
            Arc::clone(&self.inner.fitness_function),
            self.inner.validator.clone(),
        )
    }

    pub fn gene_count(&self) -> usize {
        self.inner.genes.len()
    }

    /// Returns the gene at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= gene_count()`.
    pub fn gene(&self, index: usize) -> Result<&G> {
        check_index(index, self.gene_count())?;
        Ok(&self.inner.genes[index])
    }

    /// Borrows the gene sequence.
    pub fn genes(&self) -> &[G] {
        &self.inner.genes
    }

    /// Returns an independent copy of the gene sequence.
    pub fn all_genes(&self) -> Vec<G> {
        self.inner.genes.clone()
    }

    /// Returns the fitness, evaluating the fitness function on the first call only.
    pub fn fitness(&self) -> f64 {
        *self
            .inner
            .fitness
            .get_or_init(|| self.inner.fitness_function.fitness(self))
    }

    /// Returns `true` if the fitness has already been computed.
    pub fn is_fitness_cached(&self) -> bool {
        self.inner.fitness.get().is_some()
    }

    /// Strict comparison on fitness.
    pub fn is_fitter_than(&self, other: &Self) -> bool {
        self.fitness() > other.fitness()
    }

    /// `true` when no validator is attached, otherwise the validator's verdict.
    pub fn is_valid(&self) -> bool {
        self.inner
            .validator
            .as_ref()
            .map_or(true, |validator| validator.is_valid(self))
    }

    pub fn fitness_function(&self) -> &Arc<dyn FitnessFunction<G>> {
        &self.inner.fitness_function
    }

    pub fn validator(&self) -> Option<&Arc<dyn ChromosomeValidator<G>>> {
        self.inner.validator.as_ref()
    }

    /// Returns `true` if both handles point at the same chromosome instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Chromosome<IntegerGene> {
    /// Creates an integer chromosome from raw values.
    pub fn from_values(
        values: Vec<usize>,
        fitness_function: Arc<dyn FitnessFunction<IntegerGene>>,
    ) -> Result<Self> {
        Self::new(values.into_iter().map(IntegerGene).collect(), fitness_function)
    }

    /// Returns the raw gene values in order.
    pub fn values(&self) -> Vec<usize> {
        self.inner.genes.iter().map(IntegerGene::value).collect()
    }

    /// Derives a new chromosome from raw values; see [`Chromosome::with_genes`].
    pub fn with_values(&self, values: Vec<usize>) -> Result<Self> {
        self.with_genes(values.into_iter().map(IntegerGene).collect())
    }
}

impl<G: Gene> Clone for Chromosome<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Gene> PartialEq for Chromosome<G> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.genes == other.inner.genes
    }
}

impl<G: Gene> Eq for Chromosome<G> {}

impl<G: Gene> Hash for Chromosome<G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.genes.hash(state);
    }
}

impl<G: Gene> fmt::Debug for Chromosome<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("genes", &self.inner.genes)
            .field("fitness", &self.inner.fitness.get())
            .finish()
    }
}
