use crate::chromosome::Gene;
use crate::continuation::Continuation;
use crate::evolution::EvolutionProgress;
use crate::population::Population;

/// Continues while the latest population's generation is below the cap.
///
/// With a cap of `n` the run ends once generation `n` has been produced.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCap {
    cap: usize,
}

impl GenerationCap {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

impl<G: Gene> Continuation<G> for GenerationCap {
    fn should_continue(
        &mut self,
        population: &Population<G>,
        _progress: &dyn EvolutionProgress<G>,
    ) -> bool {
        population.generation() < self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::IntegerGene;
    use crate::continuation::test_support::Best;

    #[test]
    fn test_generation_cap() {
        let mut cap = GenerationCap::new(3);

        let answers: Vec<bool> = (0..5)
            .map(|generation| {
                Continuation::<IntegerGene>::should_continue(
                    &mut cap,
                    &Population::new(generation),
                    &Best(None),
                )
            })
            .collect();

        assert_eq!(answers, vec![true, true, true, false, false]);
    }
}
