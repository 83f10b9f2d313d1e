/// A pair of elements sorted in increasing order.
///
/// Used as the key of an unordered pair: `SortedPair::new(a, b) == SortedPair::new(b, a)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SortedPair<T: PartialOrd>([T; 2]);

impl<T: PartialOrd> SortedPair<T> {
    /// Sorts two elements in increasing order into a new pair.
    pub fn new(element1: T, element2: T) -> Self {
        if element1 > element2 {
            SortedPair([element2, element1])
        } else {
            SortedPair([element1, element2])
        }
    }

    /// The smallest element.
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// The largest element.
    pub fn second(&self) -> &T {
        &self.0[1]
    }

    /// Returns both elements, smallest first.
    pub fn into_inner(self) -> (T, T) {
        let [a, b] = self.0;
        (a, b)
    }
}
