use crate::chromosome::{Chromosome, IntegerGene};
use crate::crossover::repair::PermutationRepair;
use crate::crossover::CrossoverOperator;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Partially Mapped Crossover (PMX) for permutations.
///
/// # Algorithm
///
/// 1. Choose a segment `[start, end)` with `start < end`, uniformly unless fixed
///    with [`Pmx::with_cut`].
/// 2. Each child takes the *other* parent's segment verbatim.
/// 3. Outside the segment, each child keeps its own parent's value wherever that
///    value is not already in the child.
/// 4. The positions still open are filled left to right with the smallest values the
///    child is missing.
///
/// Requires at least 2 genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Pmx {
    cut: Option<(usize, usize)>,
}

impl Pmx {
    /// PMX with a random segment on every call.
    pub fn new() -> Self {
        Self { cut: None }
    }

    /// PMX that always uses the segment `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `start < end`. An `end` past the parents'
    /// length is rejected when the operator runs.
    pub fn with_cut(start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(GeneticError::InvalidArgument(format!(
                "PMX segment [{}, {}) is empty",
                start, end
            )));
        }

        Ok(Self {
            cut: Some((start, end)),
        })
    }

    fn segment(&self, len: usize, rng: &mut RandomNumberGenerator) -> Result<(usize, usize)> {
        match self.cut {
            Some((start, end)) if end <= len => Ok((start, end)),
            Some((start, end)) => Err(GeneticError::InvalidArgument(format!(
                "PMX segment [{}, {}) does not fit {} genes",
                start, end, len
            ))),
            None => {
                let start = rng.gen_index(len);
                let end = rng.gen_range(start + 1..=len);
                Ok((start, end))
            }
        }
    }

    fn build_child(
        repair: &PermutationRepair,
        own: &[usize],
        donor: &[usize],
        start: usize,
        end: usize,
    ) -> Result<Vec<usize>> {
        let mut child = repair.child();

        for position in start..end {
            child.place(position, donor[position]);
        }
        for position in (0..start).chain(end..own.len()) {
            child.place(position, own[position]);
        }

        child.fill_open()
    }
}

impl CrossoverOperator for Pmx {
    fn recombine(
        &self,
        first: &Chromosome<IntegerGene>,
        second: &Chromosome<IntegerGene>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<[Chromosome<IntegerGene>; 2]> {
        let p1 = first.values();
        let p2 = second.values();
        let repair = PermutationRepair::new(&p1, &p2, 2)?;
        let (start, end) = self.segment(p1.len(), rng)?;

        let child1 = Self::build_child(&repair, &p1, &p2, start, end)?;
        let child2 = Self::build_child(&repair, &p2, &p1, start, end)?;

        Ok([first.with_values(child1)?, second.with_values(child2)?])
    }
}
