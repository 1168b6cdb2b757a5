use crate::chromosome::{Chromosome, IntegerGene};
use crate::crossover::repair::PermutationRepair;
use crate::crossover::CrossoverOperator;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// One-point crossover for permutations.
///
/// Each child copies its own parent up to the cut. Past the cut it adopts the other
/// parent's value at each position unless that value is already in the child, and
/// the positions left open are filled with the smallest missing values.
///
/// The cut lies in `1..len`, so every child keeps at least one gene of each parent's
/// layout. Requires at least 2 genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct OnePointCrossover {
    cut: Option<usize>,
}

impl OnePointCrossover {
    pub fn new() -> Self {
        Self { cut: None }
    }

    /// One-point crossover that always cuts before position `cut`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `cut` is 0. A cut at or past the parents' length
    /// is rejected when the operator runs.
    pub fn with_cut(cut: usize) -> Result<Self> {
        if cut == 0 {
            return Err(GeneticError::InvalidArgument(
                "One-point cut must be at least 1".to_string(),
            ));
        }

        Ok(Self { cut: Some(cut) })
    }

    fn cut_point(&self, len: usize, rng: &mut RandomNumberGenerator) -> Result<usize> {
        match self.cut {
            Some(cut) if cut < len => Ok(cut),
            Some(cut) => Err(GeneticError::InvalidArgument(format!(
                "One-point cut {} does not fit {} genes",
                cut, len
            ))),
            None => Ok(rng.gen_range(1..len)),
        }
    }

    fn build_child(
        repair: &PermutationRepair,
        own: &[usize],
        other: &[usize],
        cut: usize,
    ) -> Result<Vec<usize>> {
        let mut child = repair.child();

        for (position, &value) in own.iter().enumerate().take(cut) {
            child.place(position, value);
        }
        for (position, &value) in other.iter().enumerate().skip(cut) {
            child.place(position, value);
        }

        child.fill_open()
    }
}

impl CrossoverOperator for OnePointCrossover {
    fn recombine(
        &self,
        first: &Chromosome<IntegerGene>,
        second: &Chromosome<IntegerGene>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<[Chromosome<IntegerGene>; 2]> {
        let p1 = first.values();
        let p2 = second.values();
        let repair = PermutationRepair::new(&p1, &p2, 2)?;
        let cut = self.cut_point(p1.len(), rng)?;

        let child1 = Self::build_child(&repair, &p1, &p2, cut)?;
        let child2 = Self::build_child(&repair, &p2, &p1, cut)?;

        Ok([first.with_values(child1)?, second.with_values(child2)?])
    }
}
