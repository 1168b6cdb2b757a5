//! # Crossover Strategies
//!
//! Crossover combines parents into children. The engine talks to a
//! [`CrossoverStrategy`], which declares how many parents it consumes per call and
//! may return the parents untouched.
//!
//! The permutation operators in this module ([`Pmx`], [`CycleCrossover`],
//! [`EdgeRecombination`], [`OnePointCrossover`]) implement the narrower
//! [`CrossoverOperator`] trait: given two parents that permute the same values, they
//! always produce children that permute those values too. Wrapping an operator in
//! [`GatedCrossover`] puts a [`DecisionMaker`] in front of it, which is how an
//! operator becomes a strategy.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use permga::chromosome::{Chromosome, FitnessFunction, IntegerGene};
//! use permga::crossover::{CrossoverStrategy, GatedCrossover, Pmx};
//! use permga::decision::Always;
//! use permga::rng::RandomNumberGenerator;
//!
//! let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
//!     Arc::new(|_: &Chromosome<IntegerGene>| 0.0);
//! let parents = vec![
//!     Chromosome::from_values(vec![1, 2, 4, 6, 0, 5, 3], Arc::clone(&fitness)).unwrap(),
//!     Chromosome::from_values(vec![3, 4, 5, 2, 1, 6, 0], fitness).unwrap(),
//! ];
//!
//! let mut rng = RandomNumberGenerator::from_seed(0);
//! let mut crossover = GatedCrossover::new(Pmx::with_cut(3, 6).unwrap(), Always);
//! let children = crossover.crossover(&parents, &mut rng).unwrap();
//!
//! assert_eq!(children[0].values(), vec![0, 5, 4, 2, 1, 6, 3]);
//! assert_eq!(children[1].values(), vec![3, 4, 1, 6, 0, 5, 2]);
//! ```

mod cycle;
mod edge;
mod one_point;
mod pmx;
mod repair;

use std::fmt::{self, Debug};

use crate::chromosome::{Chromosome, Gene, IntegerGene};
use crate::decision::{DecisionMaker, OperatorStats};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use cycle::CycleCrossover;
pub use edge::{EdgeRecombination, SecondChild};
pub use one_point::OnePointCrossover;
pub use pmx::Pmx;

/// What the engine calls to turn the breeding pool into children.
pub trait CrossoverStrategy<G: Gene>: Debug {
    /// How many consecutive pool entries make up one call's parents.
    fn parents_required(&self) -> usize;

    /// Recombines exactly [`parents_required`](Self::parents_required) parents.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the parent count is wrong or the parents cannot
    /// be recombined.
    fn crossover(
        &mut self,
        parents: &[Chromosome<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>>;
}

impl<G: Gene, S: CrossoverStrategy<G> + ?Sized> CrossoverStrategy<G> for Box<S> {
    fn parents_required(&self) -> usize {
        (**self).parents_required()
    }

    fn crossover(
        &mut self,
        parents: &[Chromosome<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        (**self).crossover(parents, rng)
    }
}

/// A permutation crossover without a gate.
///
/// Implementations receive two parents that permute the same values and return two
/// children derived from them with [`Chromosome::with_values`].
pub trait CrossoverOperator: Debug + Send {
    /// Recombines two parents.
    fn recombine(
        &self,
        first: &Chromosome<IntegerGene>,
        second: &Chromosome<IntegerGene>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<[Chromosome<IntegerGene>; 2]>;
}

/// Puts a [`DecisionMaker`] in front of a [`CrossoverOperator`].
///
/// When the decision maker declines, the parents are returned unchanged (as clones
/// sharing their cached fitness).
pub struct GatedCrossover<O> {
    operator: O,
    decision_maker: Box<dyn DecisionMaker>,
    stats: OperatorStats,
}

impl<O: CrossoverOperator> GatedCrossover<O> {
    pub fn new<D>(operator: O, decision_maker: D) -> Self
    where
        D: DecisionMaker + 'static,
    {
        Self {
            operator,
            decision_maker: Box::new(decision_maker),
            stats: OperatorStats::default(),
        }
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    pub fn stats(&self) -> OperatorStats {
        self.stats
    }
}

impl<O: Debug> Debug for GatedCrossover<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatedCrossover")
            .field("operator", &self.operator)
            .field("decision_maker", &self.decision_maker)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<O: CrossoverOperator> CrossoverStrategy<IntegerGene> for GatedCrossover<O> {
    fn parents_required(&self) -> usize {
        2
    }

    fn crossover(
        &mut self,
        parents: &[Chromosome<IntegerGene>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<IntegerGene>>> {
        let [first, second] = parents else {
            return Err(GeneticError::InvalidArgument(format!(
                "Crossover needs exactly 2 parents, got {}",
                parents.len()
            )));
        };

        if !self.stats.gate(self.decision_maker.as_mut(), rng) {
            return Ok(parents.to_vec());
        }

        Ok(self.operator.recombine(first, second, rng)?.into())
    }
}
