use crate::math::Real;
use crate::shape::PipeId;

/// Indicates that a manhole cannot be used to place pipes.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ManholeError {
    /// The diameter is zero or negative, so the wall has no circumference.
    #[error("the manhole diameter must be positive, got {0}.")]
    NonPositiveDiameter(Real),
    /// The required clearance between pipes is negative.
    #[error("the minimum spacing between pipes must not be negative, got {0}.")]
    NegativeMinSpacing(Real),
    /// One of the manhole dimensions is NaN or infinite.
    #[error("the manhole field `{field}` is not a finite number.")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Indicates that a pipe has an impossible geometry.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PipeError {
    /// The bore radius is zero or negative.
    #[error("the pipe {id} must have a positive radius, got {radius}.")]
    NonPositiveRadius {
        /// The offending pipe.
        id: PipeId,
        /// Its bore radius, in meters.
        radius: Real,
    },
    /// The wall thickness is negative.
    #[error("the pipe {id} must not have a negative wall thickness, got {thickness_mm}mm.")]
    NegativeThickness {
        /// The offending pipe.
        id: PipeId,
        /// Its wall thickness, in millimeters.
        thickness_mm: Real,
    },
    /// One of the pipe dimensions is NaN or infinite.
    #[error("the field `{field}` of the pipe {id} is not a finite number.")]
    NonFinite {
        /// The offending pipe.
        id: PipeId,
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Indicates an inconsistency in a manhole/pipes snapshot.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SystemError {
    /// The manhole geometry is invalid.
    #[error("Manhole Error: {0}")]
    Manhole(#[from] ManholeError),
    /// One of the pipes has an invalid geometry.
    #[error("Pipe Error: {0}")]
    Pipe(#[from] PipeError),
    /// Two pipes of the snapshot share the same identifier.
    #[error("the pipe identifier {0} is used more than once.")]
    DuplicatePipeId(PipeId),
}
