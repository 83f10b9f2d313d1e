//! Spatial partitioning tools.

pub use self::spatial_hash::{CellKey, SpatialHashGrid};

mod spatial_hash;
