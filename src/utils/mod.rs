//! Various unsorted logical helpers.

pub use self::sorted_pair::SortedPair;

pub mod hashmap;
mod sorted_pair;
