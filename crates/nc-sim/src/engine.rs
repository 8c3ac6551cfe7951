//! The `Sim` struct and the relaxation loop.

use nc_core::{DirectionSource, NodeId, SimRng, Vector};

use crate::{
    Force, LatencyMatrix, NoopObserver, SimError, SimObserver, SimParams, SimResult, UpdateEvent,
    UpdateSchedule,
};

/// Run a simulation with default parameters and a seeded direction source.
///
/// The one-call entry point: relaxes `coords` in place against `matrix`,
/// following `schedule`, and returns the event trace.  Equivalent to
/// constructing a [`Sim`] with [`SimParams::default`] and running it with a
/// [`NoopObserver`].
pub fn simulate(
    coords:   &mut [Vector],
    matrix:   &LatencyMatrix,
    schedule: &UpdateSchedule,
) -> SimResult<Vec<UpdateEvent>> {
    let params = SimParams::default();
    let directions = SimRng::new(params.seed);
    Sim::new(params, coords, matrix, directions)?.run(schedule, &mut NoopObserver)
}

/// The relaxation engine.
///
/// `Sim<D>` borrows the caller's coordinate table mutably for its whole
/// lifetime and writes each update back in place — that is the contract, not
/// an implementation detail: after a run, `coords[k]` reflects every update
/// for node `k` that appeared in the schedule, in schedule order.  The
/// latency matrix is read-only throughout.
///
/// Execution is strictly single-threaded and sequential: one update fully
/// completes (including its table write) before the next schedule entry
/// begins.  The only non-deterministic step — the direction chosen for two
/// coincident nodes at the origin — comes from the injected
/// [`DirectionSource`], so a seeded source makes whole runs reproducible.
pub struct Sim<'a, D: DirectionSource> {
    /// Step size and seed for this run.
    pub params: SimParams,

    /// Caller-owned coordinate table, one entry per node, mutated in place.
    pub coords: &'a mut [Vector],

    /// Measured RTTs, `coords.len()` × `coords.len()`.
    pub matrix: &'a LatencyMatrix,

    /// Symmetry-breaking direction source (see [`nc_core::rng`]).
    pub directions: D,
}

impl<'a, D: DirectionSource> Sim<'a, D> {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate inputs and return a ready-to-run engine.
    ///
    /// Rejects, without touching any state:
    /// - a step size outside (0, 1] or non-finite;
    /// - a matrix whose size differs from the coordinate count;
    /// - a coordinate table with mixed dimensions.
    pub fn new(
        params:     SimParams,
        coords:     &'a mut [Vector],
        matrix:     &'a LatencyMatrix,
        directions: D,
    ) -> SimResult<Self> {
        if !params.step_size.is_finite() || params.step_size <= 0.0 || params.step_size > 1.0 {
            return Err(SimError::StepSize(params.step_size));
        }
        if matrix.len() != coords.len() {
            return Err(SimError::CountMismatch {
                expected: coords.len(),
                got:      matrix.len(),
                what:     "latency matrix",
            });
        }
        if let Some(first) = coords.first() {
            let dim = first.dim();
            for (k, c) in coords.iter().enumerate() {
                if c.dim() != dim {
                    return Err(SimError::DimensionMismatch {
                        expected: dim,
                        got:      c.dim(),
                        node:     NodeId(k as u32),
                    });
                }
            }
        }
        Ok(Self { params, coords, matrix, directions })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Process the whole schedule, emitting one [`UpdateEvent`] per entry in
    /// schedule order.
    ///
    /// Every schedule entry is range-checked *before* the first update, so a
    /// run either completes entirely or returns an error with the table
    /// untouched — there are no partial results.
    pub fn run<O: SimObserver>(
        &mut self,
        schedule: &UpdateSchedule,
        observer: &mut O,
    ) -> SimResult<Vec<UpdateEvent>> {
        for &node in schedule.nodes() {
            self.check_node(node)?;
        }

        let mut events = Vec::with_capacity(schedule.len());
        for (step, &node) in schedule.nodes().iter().enumerate() {
            observer.on_update_start(step, node);
            let event = self.update(node);
            observer.on_update_end(step, &event);
            events.push(event);
        }
        observer.on_run_end(events.len());
        Ok(events)
    }

    /// Apply a single update to `node` and return its event.
    ///
    /// Useful for tests and incremental stepping; `run` is `step` in a loop
    /// with up-front schedule validation and observer hooks.
    pub fn step(&mut self, node: NodeId) -> SimResult<UpdateEvent> {
        self.check_node(node)?;
        Ok(self.update(node))
    }

    // ── Core update ───────────────────────────────────────────────────────

    fn check_node(&self, node: NodeId) -> SimResult<()> {
        if node.index() >= self.coords.len() {
            return Err(SimError::NodeOutOfRange {
                node,
                count: self.coords.len(),
            });
        }
        Ok(())
    }

    /// One Vivaldi update: pull `node` along the sum of its neighbor spring
    /// forces.  Precondition (checked by callers): `node` is in range.
    fn update(&mut self, node: NodeId) -> UpdateEvent {
        let i = node.index();
        let x_i = self.coords[i].clone();
        let dim = x_i.dim();

        let mut forces = Vec::with_capacity(self.coords.len().saturating_sub(1));
        let mut total_force = Vector::zero(dim);

        // Ascending neighbor order; the order only affects floating-point
        // rounding of the accumulated total, not the mathematical result.
        for (j, x_j) in self.coords.iter().enumerate() {
            if j == i {
                continue;
            }
            let neighbor = NodeId(j as u32);
            let rtt = self.matrix.rtt(node, neighbor);
            let error = rtt - x_i.distance(x_j);
            let direction = x_i.direction_from(x_j, &mut self.directions);
            let force = direction.scale(error);
            total_force = force.add(&total_force);
            forces.push(Force { from: neighbor, vector: force });
        }

        let force_step = total_force.scale(self.params.step_size);
        let after = x_i.add(&force_step);

        // Snapshot before the write: the event records the table as this
        // update saw it, with all earlier schedule entries already applied.
        let snapshot = self.coords.to_vec();
        self.coords[i] = after.clone();

        UpdateEvent {
            node,
            before: x_i,
            after,
            forces,
            total_force,
            coords: snapshot,
        }
    }
}
