use std::collections::HashMap;

use crate::error::{GeneticError, Result};

/// Bookkeeping shared by the permutation crossovers.
///
/// Built once per pair of parents. It fixes the alphabet both parents permute and
/// gives every value a dense slot, so children can track used values in a bitset.
#[derive(Debug, Clone)]
pub(crate) struct PermutationRepair {
    alphabet: Vec<usize>,
    slots: HashMap<usize, usize>,
}

impl PermutationRepair {
    /// Checks that both parents are permutations of one alphabet of at least
    /// `min_genes` values.
    pub(crate) fn new(first: &[usize], second: &[usize], min_genes: usize) -> Result<Self> {
        if first.len() != second.len() {
            return Err(GeneticError::InvalidArgument(format!(
                "Parents have different lengths: {} and {}",
                first.len(),
                second.len()
            )));
        }
        if first.len() < min_genes {
            return Err(GeneticError::InvalidArgument(format!(
                "Crossover needs at least {} genes, got {}",
                min_genes,
                first.len()
            )));
        }

        let mut alphabet = first.to_vec();
        alphabet.sort_unstable();
        if alphabet.windows(2).any(|w| w[0] == w[1]) {
            return Err(GeneticError::InvalidArgument(
                "Parent contains duplicate values".to_string(),
            ));
        }

        let mut other = second.to_vec();
        other.sort_unstable();
        if other != alphabet {
            return Err(GeneticError::InvalidArgument(
                "Parents are not permutations of the same values".to_string(),
            ));
        }

        let slots = alphabet
            .iter()
            .enumerate()
            .map(|(slot, &value)| (value, slot))
            .collect();

        Ok(Self { alphabet, slots })
    }

    pub(crate) fn len(&self) -> usize {
        self.alphabet.len()
    }

    /// Values in ascending order.
    pub(crate) fn alphabet(&self) -> &[usize] {
        &self.alphabet
    }

    /// Maps every value's slot to its position in `parent`.
    pub(crate) fn positions(&self, parent: &[usize]) -> Vec<usize> {
        let mut positions = vec![0; self.len()];
        for (position, value) in parent.iter().enumerate() {
            positions[self.slots[value]] = position;
        }
        positions
    }

    pub(crate) fn slot(&self, value: usize) -> usize {
        self.slots[&value]
    }

    /// Starts a child with every position open.
    pub(crate) fn child(&self) -> ChildBuilder<'_> {
        ChildBuilder {
            repair: self,
            genes: vec![None; self.len()],
            used: vec![false; self.len()],
        }
    }
}

/// A child under construction: open positions plus the set of values already placed.
#[derive(Debug)]
pub(crate) struct ChildBuilder<'a> {
    repair: &'a PermutationRepair,
    genes: Vec<Option<usize>>,
    used: Vec<bool>,
}

impl ChildBuilder<'_> {
    pub(crate) fn is_used(&self, value: usize) -> bool {
        self.used[self.repair.slot(value)]
    }

    /// Places `value` at `position` unless the value is already in the child.
    /// Returns whether it was placed.
    pub(crate) fn place(&mut self, position: usize, value: usize) -> bool {
        let slot = self.repair.slot(value);
        if self.used[slot] {
            return false;
        }
        self.used[slot] = true;
        self.genes[position] = Some(value);
        true
    }

    /// Fills the open positions, in ascending order, with the smallest unused values.
    ///
    /// # Errors
    ///
    /// Returns `Consistency` if the number of open positions differs from the number
    /// of unused values.
    pub(crate) fn fill_open(mut self) -> Result<Vec<usize>> {
        let mut unused = self
            .repair
            .alphabet()
            .iter()
            .zip(&self.used)
            .filter(|(_, &used)| !used)
            .map(|(&value, _)| value);

        for gene in self.genes.iter_mut().filter(|gene| gene.is_none()) {
            *gene = unused.next();
        }

        let leftover = unused.count();
        let filled: Vec<usize> = self.genes.iter().filter_map(|gene| *gene).collect();

        if leftover != 0 || filled.len() != self.repair.len() {
            return Err(GeneticError::Consistency(format!(
                "Repaired child has {} of {} genes with {} values left over",
                filled.len(),
                self.repair.len(),
                leftover
            )));
        }

        Ok(filled)
    }
}
