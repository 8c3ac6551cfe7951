//! Run observer trait for progress reporting and data collection.

use nc_core::NodeId;

use crate::UpdateEvent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] around each update.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is how analysis tooling watches a
/// run without the engine knowing about any output format.
///
/// # Example — convergence printer
///
/// ```rust,ignore
/// struct ForcePrinter;
///
/// impl SimObserver for ForcePrinter {
///     fn on_update_end(&mut self, step: usize, event: &UpdateEvent) {
///         println!("step {step}: |F| = {:.4}", event.total_force.magnitude());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each update, with the schedule position and the node
    /// about to move.
    fn on_update_start(&mut self, _step: usize, _node: NodeId) {}

    /// Called after each update with the freshly emitted event, before it is
    /// appended to the returned trace.
    fn on_update_end(&mut self, _step: usize, _event: &UpdateEvent) {}

    /// Called once after the final scheduled update completes.
    fn on_run_end(&mut self, _updates: usize) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
