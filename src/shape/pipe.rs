use core::fmt;

use uuid::Uuid;

use crate::math::Real;
use crate::shape::PipeError;

/// Stable identity of a pipe cutout.
///
/// Two pipes with identical geometry are still distinct if their identifiers differ.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PipeId(Uuid);

impl PipeId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        PipeId(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        PipeId(uuid)
    }

    /// The underlying UUID.
    pub const fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PipeId {
    fn from(uuid: Uuid) -> Self {
        PipeId(uuid)
    }
}

impl fmt::Display for PipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A circular pipe penetrating the manhole wall.
///
/// The pipe is positioned by the angle of its center around the shaft and by the elevation
/// of its invert (the lowest point of the bore). Angles outside of `[0, 360)` are accepted
/// and wrapped when the pipe is placed on the unrolled wall.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(PartialEq, Debug, Clone)]
pub struct Pipe {
    /// Inner radius of the bore.
    pub radius_meters: Real,
    /// Angular position of the pipe center around the shaft.
    pub x_degrees: Real,
    /// Elevation of the lowest point of the bore.
    pub invert_elevation_meters: Real,
    /// Thickness of the pipe wall, in millimeters.
    #[cfg_attr(feature = "serde-serialize", serde(rename = "materialThicknessMM"))]
    pub material_thickness_mm: Real,
    /// Identity of this pipe.
    #[cfg_attr(feature = "serde-serialize", serde(rename = "uuid"))]
    pub id: PipeId,
    /// Name of the standard size this pipe was created from. Purely descriptive.
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub preset_name: String,
}

impl Pipe {
    /// Creates a new pipe with a fresh identifier and no preset name.
    pub fn new(
        radius_meters: Real,
        x_degrees: Real,
        invert_elevation_meters: Real,
        material_thickness_mm: Real,
    ) -> Self {
        Pipe {
            radius_meters,
            x_degrees,
            invert_elevation_meters,
            material_thickness_mm,
            id: PipeId::new(),
            preset_name: String::new(),
        }
    }

    /// Replaces the identifier of this pipe.
    pub fn with_id(mut self, id: PipeId) -> Self {
        self.id = id;
        self
    }

    /// Sets the descriptive preset name of this pipe.
    pub fn with_preset_name(mut self, name: impl Into<String>) -> Self {
        self.preset_name = name.into();
        self
    }

    /// Checks that this pipe has a physically meaningful geometry.
    pub fn validate(&self) -> Result<(), PipeError> {
        let fields = [
            ("radius_meters", self.radius_meters),
            ("x_degrees", self.x_degrees),
            ("invert_elevation_meters", self.invert_elevation_meters),
            ("material_thickness_mm", self.material_thickness_mm),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(PipeError::NonFinite {
                id: self.id,
                field: *field,
            });
        }

        if self.radius_meters <= 0.0 {
            return Err(PipeError::NonPositiveRadius {
                id: self.id,
                radius: self.radius_meters,
            });
        }

        if self.material_thickness_mm < 0.0 {
            return Err(PipeError::NegativeThickness {
                id: self.id,
                thickness_mm: self.material_thickness_mm,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Pipe, PipeId};
    use crate::math::Real;
    use crate::shape::PipeError;

    #[test]
    fn pipes_get_distinct_ids() {
        let a = Pipe::new(0.1525, 10.0, 0.0, 50.8);
        let b = a.clone().with_id(PipeId::new());
        assert_ne!(a.id, b.id);
        assert_eq!(a.radius_meters, b.radius_meters);
    }

    #[test]
    fn validate_reports_the_offending_pipe() {
        let id = PipeId::new();
        let pipe = Pipe::new(0.0, 10.0, 0.0, 50.8).with_id(id);
        assert_eq!(
            pipe.validate(),
            Err(PipeError::NonPositiveRadius { id, radius: 0.0 })
        );

        let pipe = Pipe::new(0.2, 10.0, 0.0, -1.0).with_id(id);
        assert_eq!(
            pipe.validate(),
            Err(PipeError::NegativeThickness {
                id,
                thickness_mm: -1.0
            })
        );

        let pipe = Pipe::new(0.2, Real::NAN, 0.0, 1.0).with_id(id);
        assert_eq!(
            pipe.validate(),
            Err(PipeError::NonFinite {
                id,
                field: "x_degrees"
            })
        );
    }

    #[test]
    fn validate_accepts_angles_past_a_full_turn() {
        let pipe = Pipe::new(0.2, 725.0, -3.0, 0.0).with_preset_name("375");
        assert_eq!(pipe.validate(), Ok(()));
        assert_eq!(pipe.preset_name, "375");
    }
}
