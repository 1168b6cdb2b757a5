use crate::chromosome::Gene;
use crate::error::Result;
use crate::mutation::{require_genes, MutationOperator};
use crate::rng::RandomNumberGenerator;

/// Swaps the genes at two distinct, uniformly drawn positions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Exchange;

impl<G: Gene> MutationOperator<G> for Exchange {
    fn mutate_genes(&self, genes: &[G], rng: &mut RandomNumberGenerator) -> Result<Vec<G>> {
        require_genes("Exchange", genes.len(), 2)?;

        let (i, j) = rng.gen_distinct_pair(genes.len());
        let mut swapped = genes.to_vec();
        swapped.swap(i, j);

        Ok(swapped)
    }
}
