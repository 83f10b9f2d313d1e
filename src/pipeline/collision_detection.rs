use crate::coordinates;
use crate::math::Real;
use crate::partitioning::{CellKey, SpatialHashGrid};
use crate::query;
use crate::shape::{Manhole, Pipe, PipeId, PlacedPipe, System, SystemError};
use crate::utils::hashmap::HashMap;
use crate::utils::SortedPair;

/// Finds every pair of pipes of a snapshot whose walls are closer than the manhole's
/// minimum spacing.
///
/// The detection is built once from an owned [`System`] snapshot: pipes are placed on the
/// unrolled wall, bucketed into a [`SpatialHashGrid`], and all collisions are computed
/// eagerly. The result is immutable. After any edit of the snapshot, build a new
/// `CollisionDetection`.
#[derive(Clone, Debug)]
pub struct CollisionDetection {
    system: System,
    circumference: Real,
    placed: Vec<PlacedPipe>,
    index_of: HashMap<PipeId, usize>,
    grid: Option<SpatialHashGrid>,
    collisions: Vec<(usize, usize)>,
}

impl CollisionDetection {
    /// Validates `system` and computes all its collisions.
    ///
    /// Fails if the manhole or one of the pipes has an invalid geometry, or if two pipes share
    /// the same identifier. An empty snapshot is valid and has no collision.
    pub fn new(system: System) -> Result<Self, SystemError> {
        system.validate()?;

        let circumference = coordinates::manhole_circumference(&system.manhole);
        let placed: Vec<_> = system
            .pipes
            .iter()
            .map(|pipe| PlacedPipe::new(pipe, &system.manhole))
            .collect();
        let index_of = placed
            .iter()
            .enumerate()
            .map(|(i, pipe)| (pipe.id, i))
            .collect();
        let grid =
            SpatialHashGrid::new(circumference, system.manhole.min_spacing_meters, &placed);

        let mut result = CollisionDetection {
            system,
            circumference,
            placed,
            index_of,
            grid,
            collisions: Vec::new(),
        };
        result.collisions = result.find_collisions();

        log::debug!(
            "Found {} collisions among {} pipes.",
            result.collisions.len(),
            result.placed.len()
        );

        Ok(result)
    }

    fn find_collisions(&self) -> Vec<(usize, usize)> {
        let mut collisions = Vec::new();

        for i in 0..self.placed.len() {
            for j in self.colliding_indices(i) {
                log::trace!(
                    "Collision between pipes {} and {}.",
                    self.placed[i].id,
                    self.placed[j].id
                );
                collisions.push((i, j));
            }
        }

        collisions
    }

    /// Indices of the pipes colliding with the `i`-th pipe, found through the grid.
    fn colliding_indices(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let pipe1 = &self.placed[i];
        let min_spacing = self.system.manhole.min_spacing_meters;

        self.grid
            .iter()
            .flat_map(move |grid| grid.candidates(&grid.cell_at(&pipe1.center)))
            .filter(move |&j| {
                let pipe2 = &self.placed[j];
                pipe2.id != pipe1.id
                    && query::intersection_test_pipe_pipe(
                        self.circumference,
                        min_spacing,
                        pipe1,
                        pipe2,
                    )
            })
    }

    /// Signed clearance between the outer walls of two pipes, in meters.
    ///
    /// The shortest way around the manhole is used, so pipes on each side of the 0°/360° seam
    /// are close to each other. A negative value means the walls overlap.
    ///
    /// This does not rely on the spatial grid: any two pipes can be measured, including pipes
    /// that are not part of the snapshot.
    pub fn distance_between(&self, pipe1: &Pipe, pipe2: &Pipe) -> Real {
        let manhole = &self.system.manhole;
        query::distance_pipe_pipe(
            self.circumference,
            &PlacedPipe::new(pipe1, manhole),
            &PlacedPipe::new(pipe2, manhole),
        )
    }

    /// Are the walls of the two pipes closer than the manhole's minimum spacing?
    pub fn is_colliding(&self, pipe1: &Pipe, pipe2: &Pipe) -> bool {
        self.distance_between(pipe1, pipe2) < self.system.manhole.min_spacing_meters
    }

    /// All the collisions of the snapshot.
    ///
    /// Each colliding pair is yielded twice, once as `(a, b)` and once as `(b, a)`. Use
    /// [`Self::unique_collisions`] for a de-duplicated list.
    /// This count is exact even when the grid has only one or two columns.
    pub fn collisions(&self) -> impl ExactSizeIterator<Item = (&Pipe, &Pipe)> {
        self.collisions
            .iter()
            .map(move |&(i, j)| (&self.system.pipes[i], &self.system.pipes[j]))
    }

    /// Number of ordered collision pairs, see [`Self::collisions`].
    pub fn num_collisions(&self) -> usize {
        self.collisions.len()
    }

    /// Does at least one pair of pipes violate the minimum spacing?
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }

    /// The colliding pairs of pipe identifiers, each pair listed once, in increasing order.
    pub fn unique_collisions(&self) -> Vec<SortedPair<PipeId>> {
        let mut pairs: Vec<_> = self
            .collisions
            .iter()
            .map(|&(i, j)| SortedPair::new(self.placed[i].id, self.placed[j].id))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        pairs
    }

    /// The pipes colliding with the pipe identified by `id`.
    ///
    /// Returns an empty list if no pipe of the snapshot has this identifier.
    pub fn collisions_with(&self, id: &PipeId) -> Vec<&Pipe> {
        self.index_of
            .get(id)
            .into_iter()
            .flat_map(move |&i| self.colliding_indices(i))
            .map(move |j| &self.system.pipes[j])
            .collect()
    }

    /// The grid cell containing the center of the pipe identified by `id`.
    pub fn cell_of(&self, id: &PipeId) -> Option<CellKey> {
        let grid = self.grid.as_ref()?;
        let i = *self.index_of.get(id)?;
        Some(grid.cell_at(&self.placed[i].center))
    }

    /// The spatial grid, or `None` if the snapshot has no pipe.
    pub fn grid(&self) -> Option<&SpatialHashGrid> {
        self.grid.as_ref()
    }

    /// The snapshot this detection was built from.
    pub fn system(&self) -> &System {
        &self.system
    }

    /// Gives back the snapshot, typically to edit it and build a new detection.
    pub fn into_system(self) -> System {
        self.system
    }

    /// The manhole of the snapshot.
    pub fn manhole(&self) -> &Manhole {
        &self.system.manhole
    }

    /// The pipes of the snapshot.
    pub fn pipes(&self) -> &[Pipe] {
        &self.system.pipes
    }

    /// The pipe identified by `id`, if it is part of the snapshot.
    pub fn pipe(&self, id: &PipeId) -> Option<&Pipe> {
        self.index_of.get(id).map(|&i| &self.system.pipes[i])
    }

    /// The pipes of the snapshot laid out on the unrolled wall, in the same order as
    /// [`Self::pipes`].
    pub fn placed_pipes(&self) -> &[PlacedPipe] {
        &self.placed
    }

    /// The circumference of the manhole wall.
    pub fn circumference(&self) -> Real {
        self.circumference
    }
}
