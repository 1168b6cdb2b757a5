use std::time::{Duration, Instant};

use crate::chromosome::Gene;
use crate::continuation::Continuation;
use crate::evolution::EvolutionProgress;
use crate::population::Population;

/// Continues while less wall-clock time than the budget has passed since
/// [`on_start`](Continuation::on_start).
///
/// A budget that was never started counts from its first evaluation.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    budget: Duration,
    started: Option<Instant>,
}

impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: None,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time spent since the budget started, or zero before that.
    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |started| started.elapsed())
    }
}

impl<G: Gene> Continuation<G> for TimeBudget {
    fn on_start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn should_continue(
        &mut self,
        _population: &Population<G>,
        _progress: &dyn EvolutionProgress<G>,
    ) -> bool {
        let started = *self.started.get_or_insert_with(Instant::now);
        started.elapsed() < self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::IntegerGene;
    use crate::continuation::test_support::Best;

    #[test]
    fn test_zero_budget_stops() {
        let mut budget = TimeBudget::new(Duration::ZERO);
        Continuation::<IntegerGene>::on_start(&mut budget);

        assert!(!Continuation::<IntegerGene>::should_continue(
            &mut budget,
            &Population::new(0),
            &Best(None)
        ));
    }

    #[test]
    fn test_generous_budget_continues() {
        let mut budget = TimeBudget::new(Duration::from_secs(3600));
        Continuation::<IntegerGene>::on_start(&mut budget);

        assert!(Continuation::<IntegerGene>::should_continue(
            &mut budget,
            &Population::new(0),
            &Best(None)
        ));
        assert!(budget.elapsed() < Duration::from_secs(3600));
    }

    #[test]
    fn test_unstarted_budget_starts_on_first_check() {
        let mut budget = TimeBudget::new(Duration::from_secs(3600));
        assert_eq!(budget.elapsed(), Duration::ZERO);

        Continuation::<IntegerGene>::should_continue(&mut budget, &Population::new(0), &Best(None));
        assert!(budget.started.is_some());
    }
}
