use std::collections::{BTreeMap, BTreeSet};

use crate::chromosome::{Chromosome, IntegerGene};
use crate::crossover::repair::PermutationRepair;
use crate::crossover::CrossoverOperator;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// How [`EdgeRecombination`] produces its second child.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondChild {
    /// Both children come from the tour that starts at the first parent's first value.
    #[default]
    Duplicate,
    /// The second child is a separate tour that starts at the second parent's first value.
    FromOtherParent,
}

/// Edge Recombination Crossover (ERX) for permutations.
///
/// Both parents are read as cyclic tours and every value records the neighbours it
/// has in either of them. A child tour starts at a parent's first value and always
/// moves to the unvisited neighbour with the fewest unvisited neighbours of its own,
/// breaking ties by the lowest value. When the current value has no unvisited
/// neighbour left the tour jumps to the smallest unvisited value.
///
/// Deterministic; requires at least 2 genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct EdgeRecombination {
    second_child: SecondChild,
}

impl EdgeRecombination {
    pub fn new(second_child: SecondChild) -> Self {
        Self { second_child }
    }

    pub fn second_child(&self) -> SecondChild {
        self.second_child
    }

    fn adjacency(first: &[usize], second: &[usize]) -> BTreeMap<usize, BTreeSet<usize>> {
        let mut adjacency: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();

        for tour in [first, second] {
            let len = tour.len();
            for (i, &value) in tour.iter().enumerate() {
                let neighbours = adjacency.entry(value).or_default();
                neighbours.insert(tour[(i + len - 1) % len]);
                neighbours.insert(tour[(i + 1) % len]);
            }
        }

        adjacency
    }

    fn tour(
        repair: &PermutationRepair,
        mut adjacency: BTreeMap<usize, BTreeSet<usize>>,
        start: usize,
    ) -> Result<Vec<usize>> {
        let mut child = repair.child();
        let mut current = start;

        for position in 0..repair.len() {
            child.place(position, current);
            for neighbours in adjacency.values_mut() {
                neighbours.remove(&current);
            }

            let next = adjacency
                .get(&current)
                .into_iter()
                .flatten()
                .min_by_key(|&value| adjacency.get(value).map_or(0, BTreeSet::len))
                .copied()
                .or_else(|| {
                    repair
                        .alphabet()
                        .iter()
                        .copied()
                        .find(|&value| !child.is_used(value))
                });

            match next {
                Some(value) => current = value,
                None => break,
            }
        }

        child.fill_open()
    }
}

impl CrossoverOperator for EdgeRecombination {
    fn recombine(
        &self,
        first: &Chromosome<IntegerGene>,
        second: &Chromosome<IntegerGene>,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<[Chromosome<IntegerGene>; 2]> {
        let p1 = first.values();
        let p2 = second.values();
        let repair = PermutationRepair::new(&p1, &p2, 2)?;
        let adjacency = Self::adjacency(&p1, &p2);

        let child1 = Self::tour(&repair, adjacency.clone(), p1[0])?;
        let child2 = match self.second_child {
            SecondChild::Duplicate => child1.clone(),
            SecondChild::FromOtherParent => Self::tour(&repair, adjacency, p2[0])?,
        };

        Ok([first.with_values(child1)?, second.with_values(child2)?])
    }
}
