use crate::chromosome::{Chromosome, ChromosomeValidator, IntegerGene};
use crate::error::{GeneticError, Result};

/// Accepts chromosomes whose genes are a permutation of a fixed alphabet.
///
/// A chromosome is valid when it has exactly one gene for every symbol of the
/// alphabet: no duplicates and no omissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationValidator {
    /// Sorted, duplicate-free symbols.
    alphabet: Vec<usize>,
}

impl PermutationValidator {
    /// Creates a validator for the given alphabet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the alphabet is empty or lists a symbol twice.
    pub fn new<I>(alphabet: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut alphabet: Vec<usize> = alphabet.into_iter().collect();
        if alphabet.is_empty() {
            return Err(GeneticError::InvalidArgument(
                "Permutation alphabet cannot be empty".to_string(),
            ));
        }

        alphabet.sort_unstable();
        if let Some(pair) = alphabet.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(GeneticError::InvalidArgument(format!(
                "Permutation alphabet contains {} more than once",
                pair[0]
            )));
        }

        Ok(Self { alphabet })
    }

    /// Creates a validator for the alphabet `0..size`.
    pub fn of_size(size: usize) -> Result<Self> {
        Self::new(0..size)
    }

    pub fn alphabet(&self) -> &[usize] {
        &self.alphabet
    }

    /// Checks a raw value sequence against the alphabet.
    pub fn is_permutation(&self, values: &[usize]) -> bool {
        if values.len() != self.alphabet.len() {
            return false;
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted == self.alphabet
    }
}

impl ChromosomeValidator<IntegerGene> for PermutationValidator {
    fn is_valid(&self, chromosome: &Chromosome<IntegerGene>) -> bool {
        self.is_permutation(&chromosome.values())
    }
}
