//! Additive cost matrix.

use crate::error::{PairingError, Result};
use crate::matching::Matching;
use crate::model::PreferenceModel;

/// Square `n × n` integer cost matrix, row-major.
///
/// `get(i, j)` is the penalty of pairing team lead `i` with junior `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    data: Vec<i64>,
}

impl CostMatrix {
    /// Builds a matrix from rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(PairingError::invalid(format!(
                    "cost matrix row {i} has {} columns, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { size, data })
    }

    /// Converts preference ranks into additive penalties.
    ///
    /// `cost[i][j] = 2N - [(N - rank_tl(i, j)) + (N - rank_jr(j, i))]`, so a
    /// lower cost means a higher combined satisfaction and the minimum total
    /// cost maximizes the summed (not harmonic) satisfaction.
    pub fn from_preferences(model: &PreferenceModel) -> Self {
        let n = model.size();
        let scale = model.scale() as i64;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let combined = model.team_lead_satisfaction(i, j) + model.junior_satisfaction(j, i);
                data.push(2 * scale - combined);
            }
        }
        Self { size: n, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.size + col]
    }

    /// Total cost of `matching` under this matrix.
    pub fn total(&self, matching: &Matching) -> i64 {
        matching
            .iter()
            .enumerate()
            .map(|(i, &j)| self.get(i, j))
            .sum()
    }
}
