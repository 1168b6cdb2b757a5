//! # Cost Matrix
//!
//! A square, symmetric matrix of pairwise costs indexed by gene value. The greedy
//! re-order mutation reads it to pick nearest neighbours, and fitness functions for
//! routing problems can use [`CostMatrix::tour_length`] to score a tour.

use crate::error::{GeneticError, Result};

/// Square, symmetric, finite cost matrix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Creates a cost matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the matrix is empty, not square, not symmetric,
    /// or holds a non-finite value.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GeneticError::InvalidArgument(
                "Cost matrix cannot be empty".to_string(),
            ));
        }

        let mut costs = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GeneticError::InvalidArgument(format!(
                    "Cost matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            if let Some(value) = row.iter().find(|value| !value.is_finite()) {
                return Err(GeneticError::InvalidArgument(format!(
                    "Cost matrix row {} holds a non-finite value: {}",
                    i, value
                )));
            }
            costs.extend_from_slice(row);
        }

        for i in 0..size {
            for j in (i + 1)..size {
                if costs[i * size + j] != costs[j * size + i] {
                    return Err(GeneticError::InvalidArgument(format!(
                        "Cost matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }

        Ok(Self { size, costs })
    }

    /// Builds a matrix of Euclidean distances between points.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let rows = points
            .iter()
            .map(|&(ax, ay)| {
                points
                    .iter()
                    .map(|&(bx, by)| ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost between two gene values.
    ///
    /// Panics if either value is not below `size()`.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.size + to]
    }

    /// Returns `true` if every value can be used as an index into this matrix.
    pub fn covers(&self, values: &[usize]) -> bool {
        values.iter().all(|&value| value < self.size)
    }

    /// Length of the closed tour that visits `values` in order and returns to the start.
    pub fn tour_length(&self, values: &[usize]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        values
            .iter()
            .zip(values.iter().cycle().skip(1))
            .map(|(&from, &to)| self.cost(from, to))
            .sum()
    }
}
