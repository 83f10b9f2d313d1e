use crate::math::{Real, DEGREES_PER_TURN, PI};
use crate::shape::Manhole;

/// The circumference of a circle with the given radius.
#[inline]
pub fn circumference(radius: Real) -> Real {
    2.0 * PI * radius
}

/// The circumference of the manhole wall.
#[inline]
pub fn manhole_circumference(manhole: &Manhole) -> Real {
    circumference(manhole.radius_meters())
}

/// Maps any angle, in degrees, into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: Real) -> Real {
    let normalized = degrees.rem_euclid(DEGREES_PER_TURN);

    // Tiny negative angles round up to exactly one full turn.
    if normalized >= DEGREES_PER_TURN {
        0.0
    } else {
        normalized
    }
}

/// The arc length along the manhole wall from 0° to `x_degrees`.
///
/// The result lies in `[0, circumference)`.
#[inline]
pub fn angular_to_arc_length(x_degrees: Real, manhole: &Manhole) -> Real {
    manhole_circumference(manhole) / DEGREES_PER_TURN * normalize_degrees(x_degrees)
}

/// The angle reached after walking `arc_length` meters along the manhole wall from 0°.
#[inline]
pub fn arc_length_to_degrees(arc_length: Real, manhole: &Manhole) -> Real {
    normalize_degrees(arc_length / manhole_circumference(manhole) * DEGREES_PER_TURN)
}
