use crate::chromosome::Gene;
use crate::error::Result;
use crate::mutation::{require_genes, MutationOperator};
use crate::rng::RandomNumberGenerator;

/// Removes one gene and reinserts it at a different position.
///
/// Source and destination are two distinct positions drawn uniformly; the genes in
/// between shift by one towards the source.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleGeneMove;

impl<G: Gene> MutationOperator<G> for SingleGeneMove {
    fn mutate_genes(&self, genes: &[G], rng: &mut RandomNumberGenerator) -> Result<Vec<G>> {
        require_genes("Single gene move", genes.len(), 2)?;

        let (source, destination) = rng.gen_distinct_pair(genes.len());
        let mut moved = genes.to_vec();
        let gene = moved.remove(source);
        moved.insert(destination, gene);

        Ok(moved)
    }
}

/// Removes a contiguous block of genes and reinserts it elsewhere.
///
/// The block holds between 1 and `len - 2` genes, so at least two genes stay behind
/// and the block always has somewhere else to go.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiGeneMove;

impl<G: Gene> MutationOperator<G> for MultiGeneMove {
    fn mutate_genes(&self, genes: &[G], rng: &mut RandomNumberGenerator) -> Result<Vec<G>> {
        require_genes("Multi gene move", genes.len(), 3)?;

        let len = genes.len();
        let block_len = rng.gen_range(1..=len - 2);
        let start = rng.gen_range(0..=len - block_len);

        // Insertion points into the remaining genes, skipping the one that would
        // put the block back where it was.
        let mut destination = rng.gen_range(0..len - block_len);
        if destination >= start {
            destination += 1;
        }

        let mut remaining = genes.to_vec();
        let block: Vec<G> = remaining.drain(start..start + block_len).collect();
        remaining.splice(destination..destination, block);

        Ok(remaining)
    }
}
