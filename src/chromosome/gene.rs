use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// A single scalar value in a chromosome.
///
/// Genes are immutable values; equality and hashing are defined by value.
pub trait Gene: Clone + Debug + PartialEq + Eq + Hash + Send + Sync + 'static {}

/// An integer-valued gene. Permutation chromosomes are built from these.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntegerGene(pub usize);

impl IntegerGene {
    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<usize> for IntegerGene {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl Gene for IntegerGene {}

/// A real-valued gene.
///
/// Equality and hashing compare the bit pattern of the value, so `NaN` equals
/// itself and `0.0` differs from `-0.0`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct RealGene(pub f64);

impl RealGene {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for RealGene {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for RealGene {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for RealGene {}

impl Hash for RealGene {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Gene for RealGene {}
