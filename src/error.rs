//! # Error Types
//!
//! This module defines the error type shared by every component of the library.
//! Two families of failures exist:
//!
//! - contract violations, raised when a component is constructed (or first invoked)
//!   with arguments it cannot work with, such as a tournament size of zero or a
//!   chromosome without genes;
//! - internal consistency violations, raised while a run is in progress when an
//!   operator produces something the engine cannot accept, such as a crossover
//!   child that is not a permutation.
//!
//! Neither family is retryable. The engine aborts the run on the first error.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use permga::error::{GeneticError, Result};
//!
//! fn tournament_size(k: usize) -> Result<usize> {
//!     if k == 0 {
//!         return Err(GeneticError::InvalidArgument(
//!             "Tournament size must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(k)
//! }
//!
//! assert!(tournament_size(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use permga::error::{GeneticError, OptionExt};
//!
//! fn best(candidates: &[i32]) -> permga::error::Result<i32> {
//!     candidates.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert!(best(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A component was constructed or invoked with arguments it cannot work with.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index-based accessor was called outside of `[0, len)`.
    #[error("Index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A chromosome failed validation during a run.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// An operator produced output that breaks an engine invariant.
    #[error("Consistency error: {0}")]
    Consistency(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Checks `index` against `len`, producing an `IndexOutOfBounds` error when it falls outside.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(GeneticError::IndexOutOfBounds { index, len });
    }
    Ok(())
}
