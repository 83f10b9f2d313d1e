/*!
clearance
=========

**clearance** checks the spacing between circular pipe penetrations laid out
around the cylindrical wall of a manhole.

Pipes are placed by an angle (degrees, wrapping at 360°) and an invert
elevation. The wall is unrolled into a plane whose horizontal axis is periodic,
pipes are bucketed into a spatial hash grid, and every pair of pipes whose
outer walls are closer than the manhole's minimum spacing is reported.

```
# #[cfg(feature = "f64")] {
use clearance::pipeline::CollisionDetection;
use clearance::shape::{Manhole, Pipe, System};

let manhole = Manhole::new(1.5, 3.6576, 0.1524);
let a = Pipe::new(0.1525, 0.0, 0.0, 50.8);
let b = Pipe::new(0.1525, 2.0, 0.0, 50.8);
let detection = CollisionDetection::new(System::new(manhole, vec![a, b])).unwrap();

assert_eq!(detection.unique_collisions().len(), 1);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

pub extern crate nalgebra as na;

pub mod coordinates;
pub mod math;
pub mod partitioning;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;
