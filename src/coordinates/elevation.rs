use crate::coordinates::angular_to_arc_length;
use crate::math::{Point, Real, MILLIMETERS_PER_METER, MIN_VISIBLE_SECTION_HEIGHT};
use crate::shape::{Manhole, Pipe, System};

/// Elevation of the center of the pipe bore.
#[inline]
pub fn pipe_center_elevation(pipe: &Pipe) -> Real {
    pipe.invert_elevation_meters + pipe.radius_meters
}

/// Radius of the pipe including its wall, in meters.
#[inline]
pub fn pipe_outer_radius(pipe: &Pipe) -> Real {
    pipe.radius_meters + pipe.material_thickness_mm / MILLIMETERS_PER_METER
}

/// Center of the pipe on the unrolled wall of `manhole`.
#[inline]
pub fn pipe_center(pipe: &Pipe, manhole: &Manhole) -> Point {
    Point::new(
        angular_to_arc_length(pipe.x_degrees, manhole),
        pipe_center_elevation(pipe),
    )
}

/// Height of the wall section spanning from the lowest invert (or 0) up to the rim.
///
/// Never smaller than [`MIN_VISIBLE_SECTION_HEIGHT`].
pub fn visible_section_height(system: &System) -> Real {
    let lowest_invert = system
        .pipes
        .iter()
        .map(|pipe| pipe.invert_elevation_meters)
        .reduce(Real::min)
        .unwrap_or(0.0);

    (system.manhole.rim_elevation_meters - lowest_invert).max(MIN_VISIBLE_SECTION_HEIGHT)
}
