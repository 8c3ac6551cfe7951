//! Measured round-trip-time matrix.

use nc_core::NodeId;

use crate::{SimError, SimResult};

/// Square N×N table of measured RTTs, immutable for the duration of a run.
///
/// Stored flat in row-major order; `rtt(i, j)` is a single multiply-add away
/// from the entry.  By convention the matrix is symmetric with a zero
/// diagonal, but neither is validated or relied upon: the engine only ever
/// reads off-diagonal entries for the pair being updated.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatencyMatrix {
    entries: Vec<f64>,
    n:       usize,
}

impl LatencyMatrix {
    /// Build from nested rows, validating shape and entries.
    ///
    /// Fails on ragged rows (every row must have length `rows.len()`) and on
    /// negative or non-finite entries.  Symmetry is deliberately *not*
    /// checked.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> SimResult<Self> {
        let n = rows.len();
        let mut entries = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SimError::RaggedMatrix {
                    expected: n,
                    got:      row.len(),
                    row:      i,
                });
            }
            for (j, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(SimError::InvalidRtt { row: i, col: j, value });
                }
                entries.push(value);
            }
        }
        Ok(Self { entries, n })
    }

    /// Number of nodes (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Measured RTT between nodes `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range; the engine validates its
    /// schedule before reading.
    #[inline]
    pub fn rtt(&self, i: NodeId, j: NodeId) -> f64 {
        self.entries[i.index() * self.n + j.index()]
    }
}
