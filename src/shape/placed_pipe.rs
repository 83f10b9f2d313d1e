use approx::{AbsDiffEq, RelativeEq};

use crate::coordinates;
use crate::math::{Point, Real};
use crate::shape::{Manhole, Pipe, PipeId};

/// A pipe laid out on the unrolled manhole wall, with every length in meters.
///
/// The center `x` coordinate is the arc length from 0°, always in `[0, circumference)`.
/// The center `y` coordinate is the elevation of the bore center.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct PlacedPipe {
    /// Identity of the source pipe.
    pub id: PipeId,
    /// Center of the pipe on the unrolled wall.
    pub center: Point,
    /// Bore radius plus wall thickness.
    pub outer_radius: Real,
}

impl PlacedPipe {
    /// Places `pipe` on the wall of `manhole`.
    ///
    /// This is the only place where the wall thickness is converted from millimeters.
    #[inline]
    pub fn new(pipe: &Pipe, manhole: &Manhole) -> Self {
        PlacedPipe {
            id: pipe.id,
            center: coordinates::pipe_center(pipe, manhole),
            outer_radius: coordinates::pipe_outer_radius(pipe),
        }
    }
}

impl AbsDiffEq for PlacedPipe {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.id == other.id
            && self.center.abs_diff_eq(&other.center, epsilon)
            && self.outer_radius.abs_diff_eq(&other.outer_radius, epsilon)
    }
}

impl RelativeEq for PlacedPipe {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.id == other.id
            && self.center.relative_eq(&other.center, epsilon, max_relative)
            && self
                .outer_radius
                .relative_eq(&other.outer_radius, epsilon, max_relative)
    }
}
