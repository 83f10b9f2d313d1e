//! A hash-map that iterates deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Insertion-ordered hashmap using [`indexmap::IndexMap`].
#[cfg(feature = "enhanced-determinism")]
pub use indexmap::IndexMap as HashMap;

/// Hashmap using [`hashbrown::HashMap`].
#[cfg(not(feature = "enhanced-determinism"))]
pub use hashbrown::HashMap;
