//! Scalar and linear algebra type aliases.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// Archimedes’ constant with the precision of [`Real`].
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// Archimedes’ constant with the precision of [`Real`].
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;

/// Number of degrees in one full turn around the manhole.
pub const DEGREES_PER_TURN: Real = 360.0;

/// Pipe wall thicknesses are stored in millimeters.
pub const MILLIMETERS_PER_METER: Real = 1000.0;

/// Lower bound of the wall section height shown to the user, in meters.
pub const MIN_VISIBLE_SECTION_HEIGHT: Real = 1.0;

/// A point on the unrolled wall: `x` is the arc length from 0°, `y` the elevation.
pub type Point = na::Point2<Real>;

/// A displacement on the unrolled wall.
pub type Vector = na::Vector2<Real>;
