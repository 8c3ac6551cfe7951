use nc_core::NodeId;
use thiserror::Error;

/// Contract violations rejected before the engine touches any state.
///
/// Numeric degeneracies (coincident points, zero vectors) are *not* errors;
/// they are defined cases of the direction calculation and never surface.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("schedule entry {node} is out of range for {count} nodes")]
    NodeOutOfRange { node: NodeId, count: usize },

    #[error("{what} length {got} does not match node count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("coordinate {node} has dimension {got}, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        node:     NodeId,
    },

    #[error("latency matrix row {row} has length {got}, expected {expected}")]
    RaggedMatrix {
        expected: usize,
        got:      usize,
        row:      usize,
    },

    #[error("latency matrix entry [{row}][{col}] = {value} is not a non-negative finite RTT")]
    InvalidRtt { row: usize, col: usize, value: f64 },

    #[error("step size {0} is outside (0, 1]")]
    StepSize(f64),
}

pub type SimResult<T> = Result<T, SimError>;
