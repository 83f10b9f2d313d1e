//! Pairwise geometric queries between pipes placed on the unrolled manhole wall.
//!
//! Every query takes the circumference of the manhole so the periodic `x` axis is
//! taken into account: two pipes on each side of the 0°/360° seam are close to each
//! other even though their arc-length coordinates are far apart.
//!
//! * [`query::distance_pipe_pipe()`](distance_pipe_pipe) computes the signed clearance between two pipe walls.
//! * [`query::intersection_test_pipe_pipe()`](intersection_test_pipe_pipe) tells if that clearance is below the required spacing.

pub use self::distance::distance_pipe_pipe;
pub use self::intersection_test::intersection_test_pipe_pipe;

mod distance;
mod intersection_test;
