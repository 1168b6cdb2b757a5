//! # Continuation Strategies
//!
//! A [`Continuation`] decides, after every generation, whether the engine runs
//! another one. The engine holds a [`ContinuationChain`]: an ordered list of links
//! combined with a logical OR, so the run goes on while any link still wants to
//! continue. Links are asked in order and the first one that says "continue" ends
//! the evaluation.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use permga::chromosome::IntegerGene;
//! use permga::continuation::{ContinuationChain, GenerationCap, TimeBudget};
//!
//! // Stop after 500 generations or 2 seconds, whichever comes last.
//! let chain: ContinuationChain<IntegerGene> = ContinuationChain::new()
//!     .with(GenerationCap::new(500))
//!     .with(TimeBudget::new(Duration::from_secs(2)));
//! assert_eq!(chain.len(), 2);
//! ```

mod generation;
mod optimum;
mod time;

use std::fmt::Debug;

use crate::chromosome::Gene;
use crate::evolution::EvolutionProgress;
use crate::population::Population;

pub use generation::GenerationCap;
pub use optimum::KnownOptimum;
pub use time::TimeBudget;

/// One termination policy.
pub trait Continuation<G: Gene>: Debug {
    /// Called once before the first generation is bred.
    fn on_start(&mut self) {}

    /// Returns `true` if the run should produce another generation after `population`.
    fn should_continue(
        &mut self,
        population: &Population<G>,
        progress: &dyn EvolutionProgress<G>,
    ) -> bool;
}

impl<G: Gene, C: Continuation<G> + ?Sized> Continuation<G> for Box<C> {
    fn on_start(&mut self) {
        (**self).on_start()
    }

    fn should_continue(
        &mut self,
        population: &Population<G>,
        progress: &dyn EvolutionProgress<G>,
    ) -> bool {
        (**self).should_continue(population, progress)
    }
}

/// Always continues; the run ends only through an error or another process.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Infinite;

impl<G: Gene> Continuation<G> for Infinite {
    fn should_continue(
        &mut self,
        _population: &Population<G>,
        _progress: &dyn EvolutionProgress<G>,
    ) -> bool {
        true
    }
}

/// Ordered OR over continuation links.
///
/// An empty chain never continues, so the engine produces exactly one generation.
#[derive(Debug)]
pub struct ContinuationChain<G: Gene> {
    links: Vec<Box<dyn Continuation<G> + Send>>,
}

impl<G: Gene> ContinuationChain<G> {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Builds a chain from already boxed links, in evaluation order.
    pub fn any(links: Vec<Box<dyn Continuation<G> + Send>>) -> Self {
        Self { links }
    }

    /// Appends a link; it is evaluated after the existing ones.
    pub fn with<C>(mut self, link: C) -> Self
    where
        C: Continuation<G> + Send + 'static,
    {
        self.push(link);
        self
    }

    pub fn push<C>(&mut self, link: C)
    where
        C: Continuation<G> + Send + 'static,
    {
        self.links.push(Box::new(link));
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<G: Gene> Default for ContinuationChain<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Gene> Continuation<G> for ContinuationChain<G> {
    fn on_start(&mut self) {
        for link in &mut self.links {
            link.on_start();
        }
    }

    fn should_continue(
        &mut self,
        population: &Population<G>,
        progress: &dyn EvolutionProgress<G>,
    ) -> bool {
        self.links
            .iter_mut()
            .any(|link| link.should_continue(population, progress))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::IntegerGene;
    use crate::continuation::test_support::Best;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Answers with a fixed value and counts how often it was asked.
    #[derive(Debug)]
    struct Counting {
        answer: bool,
        asked: Arc<AtomicUsize>,
        started: Arc<AtomicUsize>,
    }

    impl Continuation<IntegerGene> for Counting {
        fn on_start(&mut self) {
            self.started.fetch_add(1, Ordering::SeqCst);
        }

        fn should_continue(
            &mut self,
            _population: &Population<IntegerGene>,
            _progress: &dyn EvolutionProgress<IntegerGene>,
        ) -> bool {
            self.asked.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }

    fn counting(answer: bool) -> (Counting, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let asked = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(AtomicUsize::new(0));
        let link = Counting {
            answer,
            asked: Arc::clone(&asked),
            started: Arc::clone(&started),
        };
        (link, asked, started)
    }

    #[test]
    fn test_empty_chain_stops() {
        let mut chain: ContinuationChain<IntegerGene> = ContinuationChain::new();
        assert!(chain.is_empty());
        assert!(!chain.should_continue(&Population::new(0), &Best(None)));
    }

    #[test]
    fn test_chain_short_circuits_in_order() {
        let (first, first_asked, first_started) = counting(true);
        let (second, second_asked, second_started) = counting(false);
        let mut chain: ContinuationChain<IntegerGene> =
            ContinuationChain::new().with(first).with(second);

        chain.on_start();
        assert!(chain.should_continue(&Population::new(0), &Best(None)));

        assert_eq!(first_started.load(Ordering::SeqCst), 1);
        assert_eq!(second_started.load(Ordering::SeqCst), 1);
        assert_eq!(first_asked.load(Ordering::SeqCst), 1);
        assert_eq!(second_asked.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_chain_asks_every_link_before_stopping() {
        let (first, first_asked, _) = counting(false);
        let (second, second_asked, _) = counting(false);
        let links: Vec<Box<dyn Continuation<IntegerGene> + Send>> =
            vec![Box::new(first), Box::new(second)];
        let mut chain = ContinuationChain::any(links);

        assert!(!chain.should_continue(&Population::new(0), &Best(None)));
        assert_eq!(first_asked.load(Ordering::SeqCst), 1);
        assert_eq!(second_asked.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_infinite() {
        let mut infinite = Infinite;
        assert!(Continuation::<IntegerGene>::should_continue(
            &mut infinite,
            &Population::new(1_000_000),
            &Best(None)
        ));
    }
}
