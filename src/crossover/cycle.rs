use crate::chromosome::{Chromosome, IntegerGene};
use crate::crossover::repair::PermutationRepair;
use crate::crossover::CrossoverOperator;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Cycle Crossover (CX) for permutations.
///
/// Starting at position 0, the cycle of positions `p -> position in the second parent
/// of first[p]` is followed until it closes. The first child takes the cycle positions
/// from the first parent and every other position from the second; the second child
/// does the opposite. Every value keeps the absolute position it had in one parent.
///
/// Deterministic; requires at least 2 genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleCrossover;

impl CycleCrossover {
    /// Positions on the cycle through position 0.
    fn cycle(repair: &PermutationRepair, first: &[usize], second: &[usize]) -> Vec<bool> {
        let in_second = repair.positions(second);
        let mut in_cycle = vec![false; first.len()];

        let mut position = 0;
        while !in_cycle[position] {
            in_cycle[position] = true;
            position = in_second[repair.slot(first[position])];
        }

        in_cycle
    }

    fn build_child(
        repair: &PermutationRepair,
        in_cycle: &[bool],
        cycle_source: &[usize],
        other_source: &[usize],
    ) -> Result<Vec<usize>> {
        let mut child = repair.child();

        for (position, &on_cycle) in in_cycle.iter().enumerate() {
            let source = if on_cycle { cycle_source } else { other_source };
            child.place(position, source[position]);
        }

        child.fill_open()
    }
}

impl CrossoverOperator for CycleCrossover {
    fn recombine(
        &self,
        first: &Chromosome<IntegerGene>,
        second: &Chromosome<IntegerGene>,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<[Chromosome<IntegerGene>; 2]> {
        let p1 = first.values();
        let p2 = second.values();
        let repair = PermutationRepair::new(&p1, &p2, 2)?;
        let in_cycle = Self::cycle(&repair, &p1, &p2);

        let child1 = Self::build_child(&repair, &in_cycle, &p1, &p2)?;
        let child2 = Self::build_child(&repair, &in_cycle, &p2, &p1)?;

        Ok([first.with_values(child1)?, second.with_values(child2)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossover::test_support::{is_permutation_of, parents};

    #[test]
    fn test_cycle_crossover() {
        // Cycle through position 0 visits positions 0, 3, 6, 7.
        let [p1, p2] = parents(vec![1, 2, 3, 4, 5, 6, 7, 8], vec![8, 5, 2, 1, 3, 6, 4, 7]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let [c1, c2] = CycleCrossover.recombine(&p1, &p2, &mut rng).unwrap();

        assert_eq!(c1.values(), vec![1, 5, 2, 4, 3, 6, 7, 8]);
        assert_eq!(c2.values(), vec![8, 2, 3, 1, 5, 6, 4, 7]);
    }

    #[test]
    fn test_single_cycle_swaps_nothing() {
        let [p1, p2] = parents(vec![0, 1, 2, 3], vec![1, 2, 3, 0]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let [c1, c2] = CycleCrossover.recombine(&p1, &p2, &mut rng).unwrap();

        assert_eq!(c1.values(), p1.values());
        assert_eq!(c2.values(), p2.values());
    }

    #[test]
    fn test_values_keep_a_parent_position() {
        let [p1, p2] = parents(vec![4, 0, 3, 1, 5, 2, 6], vec![2, 6, 0, 5, 4, 3, 1]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let children = CycleCrossover.recombine(&p1, &p2, &mut rng).unwrap();
        let (v1, v2) = (p1.values(), p2.values());

        for child in &children {
            assert!(is_permutation_of(child, &p1));
            for (position, value) in child.values().into_iter().enumerate() {
                assert!(value == v1[position] || value == v2[position]);
            }
        }
    }
}
