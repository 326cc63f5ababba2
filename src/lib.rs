//! # Triangular fuzzy arithmetic
//!
//! Triangular fuzzy numbers represent uncertain quantities by a lower bound, a modal value and an
//! upper bound. This crate provides arithmetic on such numbers, a total ranking order derived from
//! their centroids, and an ordered collection that aggregates them.
#![warn(missing_docs)]

pub mod collection;
pub mod number;

#[cfg(test)]
mod tests;
