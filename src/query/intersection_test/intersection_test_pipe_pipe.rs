use crate::math::Real;
use crate::query::distance_pipe_pipe;
use crate::shape::PlacedPipe;

/// Tests if the outer walls of two pipes are closer than `min_spacing`.
///
/// Equivalently, tests if the pipes intersect once each of them is inflated by half the
/// spacing.
#[inline]
pub fn intersection_test_pipe_pipe(
    circumference: Real,
    min_spacing: Real,
    pipe1: &PlacedPipe,
    pipe2: &PlacedPipe,
) -> bool {
    distance_pipe_pipe(circumference, pipe1, pipe2) < min_spacing
}
