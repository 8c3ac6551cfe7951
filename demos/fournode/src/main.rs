//! fournode — smallest example for the rust_nc framework.
//!
//! Relaxes the classic four-node scenario: three nodes on a line plus one
//! off-axis, with measured RTTs that the initial layout badly mispredicts.
//! A round-robin schedule sweeps every node 25 times; the per-round force
//! summary shows the system settling.
//!
//! Pass an output path to write the full JSON event trace for the
//! visualization layer:
//!
//! ```text
//! cargo run -p fournode -- events.json
//! ```

use anyhow::{Context, Result};

use nc_core::{NodeId, SimRng, Vector};
use nc_sim::{LatencyMatrix, Sim, SimObserver, SimParams, UpdateEvent, UpdateSchedule};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROUNDS:    usize = 25;
const STEP_SIZE: f64   = 0.3;
const SEED:      u64   = 42;

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Node 3's true distance to nodes 1 and 2 is sqrt(3² + 7²) ≈ 7.6158; the
/// remaining measurements disagree with the starting layout, so every node
/// has somewhere to go.
fn scenario() -> Result<(Vec<Vector>, LatencyMatrix)> {
    let coords = vec![
        Vector::from([0.0, 0.0]),
        Vector::from([4.0, 0.0]),
        Vector::from([10.0, 0.0]),
        Vector::from([7.0, 7.0]),
    ];
    let matrix = LatencyMatrix::from_rows(vec![
        vec![0.0, 5.0, 5.0, 3.0],
        vec![5.0, 0.0, 6.0, 7.615773105863909],
        vec![5.0, 6.0, 0.0, 7.615773105863909],
        vec![3.0, 7.615773105863909, 7.615773105863909, 0.0],
    ])?;
    Ok((coords, matrix))
}

// ── Round summary observer ────────────────────────────────────────────────────

/// Prints the worst total-force magnitude seen in each round-robin sweep.
struct RoundReport {
    per_round: usize,
    worst:     f64,
}

impl SimObserver for RoundReport {
    fn on_update_end(&mut self, step: usize, event: &UpdateEvent) {
        self.worst = self.worst.max(event.total_force.magnitude());
        if (step + 1) % self.per_round == 0 {
            println!("round {:>2}: max |force| = {:.4}", (step + 1) / self.per_round, self.worst);
            self.worst = 0.0;
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let (mut coords, matrix) = scenario()?;
    let initial = coords.clone();
    let schedule = UpdateSchedule::round_robin(coords.len(), ROUNDS);

    let params = SimParams { step_size: STEP_SIZE, seed: SEED };
    let mut sim = Sim::new(params, &mut coords, &matrix, SimRng::new(SEED))?;
    let mut report = RoundReport { per_round: initial.len(), worst: 0.0 };
    let events = sim.run(&schedule, &mut report)?;

    println!();
    println!("node  initial            final");
    for (k, (before, after)) in initial.iter().zip(coords.iter()).enumerate() {
        let before = before.to_string();
        println!("{k:>4}  {before:<18} {after}");
    }

    println!();
    println!("pair   predicted  measured  error%");
    for i in 0..coords.len() {
        for j in (i + 1)..coords.len() {
            let predicted = coords[i].distance(&coords[j]);
            let measured = matrix.rtt(NodeId(i as u32), NodeId(j as u32));
            let error = 100.0 * (measured - predicted).abs() / measured;
            println!("{i}-{j}    {predicted:>8.4}  {measured:>8.4}  {error:>5.2}");
        }
    }

    if let Some(path) = std::env::args().nth(1) {
        let json = serde_json::to_string_pretty(&events).context("serializing event trace")?;
        std::fs::write(&path, json).with_context(|| format!("writing {path}"))?;
        println!();
        println!("wrote {} events to {path}", events.len());
    }

    Ok(())
}
