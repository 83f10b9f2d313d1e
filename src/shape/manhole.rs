use crate::math::Real;
use crate::shape::ManholeError;

/// A cylindrical manhole shaft.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Manhole {
    /// Elevation of the top of the shaft.
    pub rim_elevation_meters: Real,
    /// Inner diameter of the shaft.
    pub diameter_meters: Real,
    /// Required clearance between the outer walls of any two pipes.
    pub min_spacing_meters: Real,
}

impl Manhole {
    /// Creates a new manhole.
    #[inline]
    pub fn new(rim_elevation_meters: Real, diameter_meters: Real, min_spacing_meters: Real) -> Self {
        Manhole {
            rim_elevation_meters,
            diameter_meters,
            min_spacing_meters,
        }
    }

    /// The radius of the shaft.
    #[inline]
    pub fn radius_meters(&self) -> Real {
        self.diameter_meters / 2.0
    }

    /// Checks that pipes can be laid out on this manhole.
    pub fn validate(&self) -> Result<(), ManholeError> {
        let fields = [
            ("rim_elevation_meters", self.rim_elevation_meters),
            ("diameter_meters", self.diameter_meters),
            ("min_spacing_meters", self.min_spacing_meters),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ManholeError::NonFinite { field: *field });
        }

        if self.diameter_meters <= 0.0 {
            return Err(ManholeError::NonPositiveDiameter(self.diameter_meters));
        }

        if self.min_spacing_meters < 0.0 {
            return Err(ManholeError::NegativeMinSpacing(self.min_spacing_meters));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Manhole;
    use crate::math::Real;
    use crate::shape::ManholeError;

    #[test]
    fn validate_accepts_zero_spacing() {
        assert_eq!(Manhole::new(1.5, 1.2192, 0.0).validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_degenerate_manholes() {
        assert_eq!(
            Manhole::new(1.5, 0.0, 0.1).validate(),
            Err(ManholeError::NonPositiveDiameter(0.0))
        );
        assert_eq!(
            Manhole::new(1.5, -2.0, 0.1).validate(),
            Err(ManholeError::NonPositiveDiameter(-2.0))
        );
        assert_eq!(
            Manhole::new(1.5, 2.0, -0.1).validate(),
            Err(ManholeError::NegativeMinSpacing(-0.1))
        );
        assert_eq!(
            Manhole::new(1.5, Real::NAN, 0.1).validate(),
            Err(ManholeError::NonFinite {
                field: "diameter_meters"
            })
        );
        assert_eq!(
            Manhole::new(Real::INFINITY, 2.0, 0.1).validate(),
            Err(ManholeError::NonFinite {
                field: "rim_elevation_meters"
            })
        );
    }
}
