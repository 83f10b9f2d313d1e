use crate::math::{Real, Vector};
use crate::shape::PlacedPipe;

/// Signed distance between the outer walls of two pipes.
///
/// Two paths are considered along the periodic `x` axis: the direct one, and the one
/// crossing the 0°/360° seam. The shortest wins. A negative result means the pipe walls
/// overlap.
///
/// The result does not depend on the order of the arguments.
#[inline]
pub fn distance_pipe_pipe(circumference: Real, pipe1: &PlacedPipe, pipe2: &PlacedPipe) -> Real {
    let dx = (pipe2.center.x - pipe1.center.x).abs();
    let dy = pipe2.center.y - pipe1.center.y;
    let sum_radius = pipe1.outer_radius + pipe2.outer_radius;

    let direct = Vector::new(dx, dy).norm();
    let wrapped = Vector::new(circumference - dx, dy).norm();

    direct.min(wrapped) - sum_radius
}
