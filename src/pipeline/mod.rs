//! Collision detection over a whole manhole snapshot.

pub use self::collision_detection::CollisionDetection;

mod collision_detection;
