//! Update schedule — which node to relax, and in what order.

use nc_core::NodeId;

/// Ordered sequence of node indices, possibly repeating, consumed
/// sequentially by [`Sim::run`][crate::Sim::run].
///
/// The schedule is caller-chosen policy: a round-robin sweep relaxes the
/// whole system, while hammering a single node pulls one coordinate into
/// place against fixed neighbors.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateSchedule(Vec<NodeId>);

impl UpdateSchedule {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        UpdateSchedule(nodes)
    }

    /// Build from plain `usize` indices.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        UpdateSchedule(indices.into_iter().map(|i| NodeId(i as u32)).collect())
    }

    /// The same node, `times` times in a row.
    pub fn repeat(node: NodeId, times: usize) -> Self {
        UpdateSchedule(vec![node; times])
    }

    /// `rounds` full sweeps over nodes `0..node_count` in ascending order.
    pub fn round_robin(node_count: usize, rounds: usize) -> Self {
        let mut nodes = Vec::with_capacity(node_count * rounds);
        for _ in 0..rounds {
            nodes.extend((0..node_count).map(|i| NodeId(i as u32)));
        }
        UpdateSchedule(nodes)
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<NodeId>> for UpdateSchedule {
    fn from(nodes: Vec<NodeId>) -> Self {
        UpdateSchedule(nodes)
    }
}
