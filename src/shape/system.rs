use hashbrown::HashSet;

use crate::shape::{Manhole, Pipe, SystemError};

/// A snapshot of a manhole and the pipes penetrating its wall.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(PartialEq, Debug, Clone)]
pub struct System {
    /// The manhole shaft.
    pub manhole: Manhole,
    /// The pipe cutouts, each with a unique identifier.
    pub pipes: Vec<Pipe>,
}

impl System {
    /// Creates a new snapshot.
    pub fn new(manhole: Manhole, pipes: Vec<Pipe>) -> Self {
        System { manhole, pipes }
    }

    /// Does this snapshot contain no pipe?
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Checks the manhole, every pipe, and the uniqueness of pipe identifiers.
    pub fn validate(&self) -> Result<(), SystemError> {
        self.manhole.validate()?;

        let mut seen = HashSet::with_capacity(self.pipes.len());
        for pipe in &self.pipes {
            pipe.validate()?;

            if !seen.insert(pipe.id) {
                return Err(SystemError::DuplicatePipeId(pipe.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::System;
    use crate::shape::{Manhole, ManholeError, Pipe, PipeError, SystemError};

    #[test]
    fn empty_system_is_valid() {
        let system = System::new(Manhole::new(1.5, 1.2, 0.1), vec![]);
        assert!(system.is_empty());
        assert_eq!(system.validate(), Ok(()));
    }

    #[test]
    fn validate_forwards_shape_errors() {
        let system = System::new(Manhole::new(1.5, 0.0, 0.1), vec![]);
        assert_eq!(
            system.validate(),
            Err(SystemError::Manhole(ManholeError::NonPositiveDiameter(0.0)))
        );

        let pipe = Pipe::new(-1.0, 0.0, 0.0, 0.0);
        let id = pipe.id;
        let system = System::new(Manhole::new(1.5, 1.2, 0.1), vec![pipe]);
        assert_eq!(
            system.validate(),
            Err(SystemError::Pipe(PipeError::NonPositiveRadius {
                id,
                radius: -1.0
            }))
        );
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let a = Pipe::new(0.2, 0.0, 0.0, 0.0);
        let b = Pipe::new(0.3, 180.0, 1.0, 0.0).with_id(a.id);
        let id = a.id;
        let system = System::new(Manhole::new(1.5, 1.2, 0.1), vec![a, b]);
        assert_eq!(system.validate(), Err(SystemError::DuplicatePipeId(id)));
    }
}
