use std::fmt;

use tracing::trace;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::evolution::EvolutionProgress;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Which of the two wrapped strategies an [`AlternatingSelection`] delegates to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSelection {
    First,
    Second,
}

type SwitchHook = Box<dyn FnMut(usize, ActiveSelection) + Send>;

/// A selection strategy that switches between two inner strategies every
/// `switch_every` generations.
///
/// The generation is read from the run's [`EvolutionProgress`], so generations
/// `0..N` use the first strategy, `N..2N` the second, and so on. A hook registered
/// with [`with_switch_hook`](AlternatingSelection::with_switch_hook) is called with
/// the generation and the newly active strategy whenever the active strategy changes.
pub struct AlternatingSelection<G: Gene> {
    first: Box<dyn SelectionStrategy<G> + Send>,
    second: Box<dyn SelectionStrategy<G> + Send>,
    switch_every: usize,
    active: Option<ActiveSelection>,
    on_switch: Option<SwitchHook>,
}

impl<G: Gene> AlternatingSelection<G> {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `switch_every` is 0.
    pub fn new<A, B>(first: A, second: B, switch_every: usize) -> Result<Self>
    where
        A: SelectionStrategy<G> + Send + 'static,
        B: SelectionStrategy<G> + Send + 'static,
    {
        if switch_every < 1 {
            return Err(GeneticError::InvalidArgument(
                "Switch interval must be at least 1 generation".to_string(),
            ));
        }

        Ok(Self {
            first: Box::new(first),
            second: Box::new(second),
            switch_every,
            active: None,
            on_switch: None,
        })
    }

    pub fn with_switch_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(usize, ActiveSelection) + Send + 'static,
    {
        self.on_switch = Some(Box::new(hook));
        self
    }

    /// The strategy used by the most recent selection, if any.
    pub fn active(&self) -> Option<ActiveSelection> {
        self.active
    }

    fn active_for(&self, generation: usize) -> ActiveSelection {
        if (generation / self.switch_every) % 2 == 0 {
            ActiveSelection::First
        } else {
            ActiveSelection::Second
        }
    }
}

impl<G: Gene> fmt::Debug for AlternatingSelection<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlternatingSelection")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("switch_every", &self.switch_every)
            .field("active", &self.active)
            .field("has_switch_hook", &self.on_switch.is_some())
            .finish()
    }
}

impl<G: Gene> SelectionStrategy<G> for AlternatingSelection<G> {
    fn select(
        &mut self,
        chromosomes: &[Chromosome<G>],
        progress: &dyn EvolutionProgress<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<G>>> {
        let generation = progress.last_generation();
        let next = self.active_for(generation);

        if let Some(previous) = self.active.replace(next) {
            if previous != next {
                trace!(generation, active = ?next, "alternating selection switched");
                if let Some(hook) = self.on_switch.as_mut() {
                    hook(generation, next);
                }
            }
        }

        match next {
            ActiveSelection::First => self.first.select(chromosomes, progress, rng),
            ActiveSelection::Second => self.second.select(chromosomes, progress, rng),
        }
    }
}
