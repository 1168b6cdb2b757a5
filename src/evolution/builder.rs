use crate::{
    chromosome::Gene,
    continuation::{Continuation, ContinuationChain},
    crossover::CrossoverStrategy,
    error::{GeneticError, OptionExt, Result},
    mutation::MutationStrategy,
    selection::SelectionStrategy,
};

use super::EvolutionEngine;

/// Assembles an [`EvolutionEngine`] one strategy at a time.
///
/// Selection, crossover and mutation are required. Continuation links are optional and
/// are evaluated in the order they were added.
pub struct EvolutionEngineBuilder<G: Gene> {
    selection: Option<Box<dyn SelectionStrategy<G> + Send>>,
    crossover: Option<Box<dyn CrossoverStrategy<G> + Send>>,
    mutation: Option<Box<dyn MutationStrategy<G> + Send>>,
    continuation: ContinuationChain<G>,
}

impl<G: Gene> EvolutionEngineBuilder<G> {
    pub fn new() -> Self {
        Self {
            selection: None,
            crossover: None,
            mutation: None,
            continuation: ContinuationChain::new(),
        }
    }

    pub fn with_selection<S>(mut self, selection: S) -> Self
    where
        S: SelectionStrategy<G> + Send + 'static,
    {
        self.selection = Some(Box::new(selection));
        self
    }

    pub fn with_crossover<C>(mut self, crossover: C) -> Self
    where
        C: CrossoverStrategy<G> + Send + 'static,
    {
        self.crossover = Some(Box::new(crossover));
        self
    }

    pub fn with_mutation<M>(mut self, mutation: M) -> Self
    where
        M: MutationStrategy<G> + Send + 'static,
    {
        self.mutation = Some(Box::new(mutation));
        self
    }

    /// Appends a continuation link to the chain.
    pub fn with_continuation<C>(mut self, continuation: C) -> Self
    where
        C: Continuation<G> + Send + 'static,
    {
        self.continuation.push(continuation);
        self
    }

    pub fn build(self) -> Result<EvolutionEngine<G>> {
        let selection = self.selection.ok_or_else_genetic(|| {
            GeneticError::InvalidArgument("Selection strategy not specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else_genetic(|| {
            GeneticError::InvalidArgument("Crossover strategy not specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else_genetic(|| {
            GeneticError::InvalidArgument("Mutation strategy not specified".to_string())
        })?;

        Ok(EvolutionEngine::from_boxed(
            selection,
            crossover,
            mutation,
            self.continuation,
        ))
    }
}

impl<G: Gene> Default for EvolutionEngineBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}
