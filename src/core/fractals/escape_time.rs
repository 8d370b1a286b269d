use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

/// Once `|z|` exceeds 2 the quadratic orbit is guaranteed to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Iterates `z = z² + c` from `z0` and returns the step at which `|z|` first
/// exceeds [`ESCAPE_RADIUS`], or `max_iterations` if it never does.
///
/// A return of `max_iterations` means "assumed bounded", not a proof of it.
#[must_use]
#[inline]
pub fn escape_count(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude() > ESCAPE_RADIUS {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z * z + c)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}
