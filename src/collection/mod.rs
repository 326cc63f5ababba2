//! # Ordered collections of triangular fuzzy numbers
//!
//! A multiset keeping its elements sorted by the rank order of the numbers it holds. Duplicates
//! are kept as distinct entries, and the only operation that can fail is asking for the mean of
//! an empty collection.
use core::fmt::Display;
use std::error::Error;
use std::fmt;
use std::slice::Iter;

use crate::number::{Real, TriFuzzyNum};


/// An ordered multiset of triangular fuzzy numbers.
///
/// The collection owns copies of everything inserted into it and never aliases caller-held
/// values. Iteration is ascending by the rank order of [`TriFuzzyNum`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TriFuzzyNumSet {
    /// Sorted ascending by rank; runs of rank-equal elements are in insertion order.
    numbers: Vec<TriFuzzyNum>,
}

impl TriFuzzyNumSet {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { numbers: Vec::new() }
    }

    /// Insert a number.
    ///
    /// A number ranking equal to an already present element is kept as a separate entry; nothing
    /// is overwritten and insertion never fails.
    pub fn insert(&mut self, number: TriFuzzyNum) {
        let index = self.numbers.partition_point(|present| present <= &number);
        self.numbers.insert(index, number);

        debug_assert!(self.numbers.is_sorted());
    }

    /// Remove one element ranking equal to `number`, if the collection holds any.
    ///
    /// When several entries rank equal to the argument, which of them leaves the collection is
    /// unspecified.
    ///
    /// # Return value
    ///
    /// Whether an element was removed. Removing an absent value is a no-op, not an error.
    pub fn remove(&mut self, number: &TriFuzzyNum) -> bool {
        match self.numbers.binary_search_by(|present| present.cmp(number)) {
            Ok(index) => {
                self.numbers.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Arithmetic mean of the collection.
    ///
    /// The lower bounds, modal values and upper bounds are averaged independently. Means of
    /// sorted triples are already sorted; the result still goes through the normalizing
    /// constructor so that the invariant is established in a single place.
    ///
    /// # Return value
    ///
    /// The mean as a new number, or an error for an empty collection. A failed call leaves the
    /// collection unchanged.
    pub fn arithmetic_mean(&self) -> Result<TriFuzzyNum, EmptySetError> {
        if self.numbers.is_empty() {
            return Err(EmptySetError);
        }

        let size = self.numbers.len() as Real;
        let total: TriFuzzyNum = self.numbers.iter().copied().sum();

        Ok(TriFuzzyNum::new(
            total.lower() / size,
            total.modal() / size,
            total.upper() / size,
        ))
    }

    /// Iterate over the elements, ascending by rank.
    pub fn iter(&self) -> Iter<'_, TriFuzzyNum> {
        self.numbers.iter()
    }

    /// Number of elements, duplicates counted.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Whether the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Collecting from a literal list of numbers.
impl<const N: usize> From<[TriFuzzyNum; N]> for TriFuzzyNumSet {
    fn from(numbers: [TriFuzzyNum; N]) -> Self {
        numbers.into_iter().collect()
    }
}

impl FromIterator<TriFuzzyNum> for TriFuzzyNumSet {
    fn from_iter<I: IntoIterator<Item = TriFuzzyNum>>(iter: I) -> Self {
        let mut numbers = iter.into_iter().collect::<Vec<_>>();
        // stable, so rank-equal elements stay in arrival order
        numbers.sort();

        Self { numbers }
    }
}

impl Extend<TriFuzzyNum> for TriFuzzyNumSet {
    fn extend<I: IntoIterator<Item = TriFuzzyNum>>(&mut self, iter: I) {
        for number in iter {
            self.insert(number);
        }
    }
}

impl IntoIterator for TriFuzzyNumSet {
    type Item = TriFuzzyNum;
    type IntoIter = std::vec::IntoIter<TriFuzzyNum>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

impl<'a> IntoIterator for &'a TriFuzzyNumSet {
    type Item = &'a TriFuzzyNum;
    type IntoIter = Iter<'a, TriFuzzyNum>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

/// The arithmetic mean of an empty collection was requested.
///
/// This is the only failure mode of the collection; all other operations are total.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EmptySetError;

impl Display for EmptySetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "arithmetic mean of an empty collection is undefined")
    }
}

impl Error for EmptySetError {}
