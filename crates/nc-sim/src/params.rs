//! Engine parameters.

/// Run-level parameters for the relaxation engine.
///
/// `step_size` is the damping/gain constant applied to the summed spring
/// force each update: small values converge slowly but stably, values near 1
/// overshoot.  Must lie in (0, 1]; validated at [`Sim::new`][crate::Sim::new].
///
/// `seed` drives the default direction source.  The same
/// `(coords, matrix, schedule, seed)` quadruple always reproduces the same
/// event trace.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    pub step_size: f64,
    pub seed:      u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            step_size: 0.3,
            seed:      0,
        }
    }
}
