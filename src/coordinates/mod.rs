//! Conversions between positions around the manhole and the unrolled wall plane.
//!
//! The wall is unrolled into a plane where `x` is the arc length measured from 0° and `y` is
//! the elevation, using the same datum as the manhole rim. The `x` axis is periodic with a
//! period of one circumference.

pub use self::arc_length::{
    angular_to_arc_length, arc_length_to_degrees, circumference, manhole_circumference,
    normalize_degrees,
};
pub use self::elevation::{
    pipe_center, pipe_center_elevation, pipe_outer_radius, visible_section_height,
};

mod arc_length;
mod elevation;
