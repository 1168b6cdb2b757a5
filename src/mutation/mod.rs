//! # Mutation Strategies
//!
//! The engine mutates every chromosome of the crossover output once per generation
//! through a [`MutationStrategy`]. The operators in this module implement
//! [`MutationOperator`], which only knows how to perturb a gene sequence, and become
//! strategies when wrapped in [`GatedMutation`] together with a [`DecisionMaker`].
//!
//! Every operator preserves the multiset of genes: applied to a permutation, it
//! yields another permutation of the same values.
//!
//! | Operator | Effect | Minimum genes |
//! |----------|--------|---------------|
//! | [`SingleGeneMove`] | moves one gene to another position | 2 |
//! | [`MultiGeneMove`] | moves a contiguous block elsewhere | 3 |
//! | [`Exchange`] | swaps two genes | 2 |
//! | [`GreedyReorder`] | re-orders a segment by nearest neighbour | 4 |
//!
//! Chromosomes shorter than an operator's minimum are rejected with
//! `InvalidArgument` when the operator runs.

mod exchange;
mod greedy;
mod moves;

use std::fmt::{self, Debug};

use crate::chromosome::{Chromosome, Gene};
use crate::decision::{DecisionMaker, OperatorStats};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use exchange::Exchange;
pub use greedy::GreedyReorder;
pub use moves::{MultiGeneMove, SingleGeneMove};

/// What the engine calls once per chromosome to mutate it.
pub trait MutationStrategy<G: Gene>: Debug {
    /// Returns the mutated chromosome, which may be `chromosome` itself.
    fn mutate(
        &mut self,
        chromosome: &Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<G>>;
}

impl<G: Gene, S: MutationStrategy<G> + ?Sized> MutationStrategy<G> for Box<S> {
    fn mutate(
        &mut self,
        chromosome: &Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<G>> {
        (**self).mutate(chromosome, rng)
    }
}

/// A mutation without a gate: rearranges a gene sequence.
pub trait MutationOperator<G: Gene>: Debug + Send {
    /// Returns the rearranged genes.
    fn mutate_genes(&self, genes: &[G], rng: &mut RandomNumberGenerator) -> Result<Vec<G>>;
}

/// Puts a [`DecisionMaker`] in front of a [`MutationOperator`].
///
/// When the decision maker declines, the input chromosome is returned as is.
pub struct GatedMutation<O> {
    operator: O,
    decision_maker: Box<dyn DecisionMaker>,
    stats: OperatorStats,
}

impl<O> GatedMutation<O> {
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

impl<O: Debug> Debug for GatedMutation<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatedMutation")
            .field("operator", &self.operator)
            .field("decision_maker", &self.decision_maker)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<G: Gene, O: MutationOperator<G>> MutationStrategy<G> for GatedMutation<O> {
    fn mutate(
        &mut self,
        chromosome: &Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<G>> {
        if !self.stats.gate(self.decision_maker.as_mut(), rng) {
            return Ok(chromosome.clone());
        }

        let genes = self.operator.mutate_genes(chromosome.genes(), rng)?;
        chromosome.with_genes(genes)
    }
}

/// Rejects sequences shorter than an operator needs.
pub(crate) fn require_genes(operator: &str, genes: usize, minimum: usize) -> Result<()> {
    if genes < minimum {
        return Err(GeneticError::InvalidArgument(format!(
            "{} needs at least {} genes, got {}",
            operator, minimum, genes
        )));
    }
    Ok(())
}
