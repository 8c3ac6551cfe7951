//! The per-update event trace — the sole output of a simulation run.
//!
//! Event records are immutable once emitted; ownership transfers to the
//! caller, who replays them for analysis or visualization.  With the `serde`
//! feature the fields serialize under the event-log names the display layer
//! already consumes (`i`, `x_i`, `x_i_next`, `totalForce`).

use nc_core::{NodeId, Vector};

/// The spring force one neighbor exerts on the node being updated.
///
/// Ephemeral — produced fresh for each update step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Force {
    /// The neighbor exerting the force.
    pub from: NodeId,
    /// Unit direction toward the updated node, scaled by the signed latency
    /// prediction error.  Zero for coincident non-origin neighbors.
    pub vector: Vector,
}

/// Record of one coordinate update.
///
/// Exactly one event is emitted per schedule entry, in schedule order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateEvent {
    /// The node whose coordinate was updated.
    #[cfg_attr(feature = "serde", serde(rename = "i"))]
    pub node: NodeId,

    /// Position of `node` when the update began.
    #[cfg_attr(feature = "serde", serde(rename = "x_i"))]
    pub before: Vector,

    /// Position written back to the table by this update.  Equals the
    /// `before` of the next event for the same node, if any.
    #[cfg_attr(feature = "serde", serde(rename = "x_i_next"))]
    pub after: Vector,

    /// Per-neighbor force contributions in ascending neighbor order,
    /// excluding `node` itself.
    pub forces: Vec<Force>,

    /// Running sum of `forces` (ascending-neighbor accumulation order).
    #[cfg_attr(feature = "serde", serde(rename = "totalForce"))]
    pub total_force: Vector,

    /// Deep snapshot of the full coordinate table at the moment of this
    /// update: all earlier schedule entries applied, this one not yet.
    pub coords: Vec<Vector>,
}
