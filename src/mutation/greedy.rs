use std::sync::Arc;

use crate::chromosome::IntegerGene;
use crate::cost::CostMatrix;
use crate::error::{GeneticError, Result};
use crate::mutation::{require_genes, MutationOperator};
use crate::rng::RandomNumberGenerator;

/// Re-orders a random segment with the nearest-neighbour heuristic.
///
/// Two positions `i < j` at least two apart are drawn, and the genes in `[i, j]` are
/// rebuilt as a nearest-neighbour path: the path starts at a random gene of the
/// segment and repeatedly continues with the unused gene closest to the last one
/// according to the cost matrix (ties go to the gene that appears first in the
/// segment). The path is written back into the same positions.
#[derive(Debug, Clone)]
pub struct GreedyReorder {
    costs: Arc<CostMatrix>,
}

impl GreedyReorder {
    pub fn new(costs: Arc<CostMatrix>) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    fn nearest_neighbour_path(&self, segment: &[usize], start: usize) -> Vec<usize> {
        let mut remaining = segment.to_vec();
        let mut last = remaining.remove(start);
        let mut path = Vec::with_capacity(segment.len());
        path.push(last);

        while !remaining.is_empty() {
            let mut nearest = 0;
            for (idx, &candidate) in remaining.iter().enumerate().skip(1) {
                if self.costs.cost(last, candidate) < self.costs.cost(last, remaining[nearest]) {
                    nearest = idx;
                }
            }
            last = remaining.remove(nearest);
            path.push(last);
        }

        path
    }
}

impl MutationOperator<IntegerGene> for GreedyReorder {
    fn mutate_genes(
        &self,
        genes: &[IntegerGene],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<IntegerGene>> {
        require_genes("Greedy re-order", genes.len(), 4)?;

        let values: Vec<usize> = genes.iter().map(IntegerGene::value).collect();
        if !self.costs.covers(&values) {
            return Err(GeneticError::InvalidArgument(format!(
                "Cost matrix of size {} does not cover the chromosome's values",
                self.costs.size()
            )));
        }

        let len = values.len();
        let i = rng.gen_index(len - 2);
        let j = rng.gen_range(i + 2..len);
        let start = rng.gen_index(j - i + 1);

        let path = self.nearest_neighbour_path(&values[i..=j], start);

        let mut reordered = genes.to_vec();
        for (slot, value) in reordered[i..=j].iter_mut().zip(path) {
            *slot = IntegerGene(value);
        }

        Ok(reordered)
    }
}
