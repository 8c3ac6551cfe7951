//! `nc-core` — foundational types for the `rust_nc` network-coordinate
//! framework.
//!
//! This crate has no `nc-*` dependencies and minimal external ones (only
//! `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `NodeId`                                                |
//! | [`vector`] | `Vector` — dimension-generic Euclidean vector algebra   |
//! | [`rng`]    | `SimRng`, `DirectionSource`, `FixedDirection`           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by event-trace consumers.                         |

pub mod ids;
pub mod rng;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::NodeId;
pub use rng::{DirectionSource, FixedDirection, SimRng};
pub use vector::Vector;
