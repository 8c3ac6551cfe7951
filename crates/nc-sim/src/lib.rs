//! `nc-sim` — centralized Vivaldi relaxation engine for the rust_nc
//! framework.
//!
//! # One update step
//!
//! ```text
//! for node i in schedule (strictly sequential):
//!   ① Forces    — for every other node j, ascending:
//!                   error  = rtt(i, j) − distance(x_i, x_j)
//!                   force  = unit direction from x_j toward x_i, scaled by error
//!                 accumulate into total_force.
//!   ② Move      — x_i_next = x_i + total_force · step_size
//!   ③ Snapshot  — deep-copy the coordinate table (pre-write)
//!   ④ Write     — coords[i] = x_i_next
//!   ⑤ Emit      — UpdateEvent { node, before, after, forces, total_force, coords }
//! ```
//!
//! Each update fully completes — including its coordinate-table write —
//! before the next schedule entry begins, so the run is deterministic given
//! `(coords, matrix, schedule, seed)`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nc_core::Vector;
//! use nc_sim::{simulate, LatencyMatrix, UpdateSchedule};
//!
//! let mut coords = vec![Vector::from([0.0, 0.0]), Vector::from([4.0, 0.0])];
//! let matrix = LatencyMatrix::from_rows(vec![vec![0.0, 5.0], vec![5.0, 0.0]])?;
//! let events = simulate(&mut coords, &matrix, &UpdateSchedule::round_robin(2, 10))?;
//! ```

pub mod engine;
pub mod error;
pub mod event;
pub mod matrix;
pub mod observer;
pub mod params;
pub mod schedule;


pub use engine::{Sim, simulate};
pub use error::{SimError, SimResult};
pub use event::{Force, UpdateEvent};
pub use matrix::LatencyMatrix;
pub use observer::{NoopObserver, SimObserver};
pub use params::SimParams;
pub use schedule::UpdateSchedule;
