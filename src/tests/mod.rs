//! # Scenario tests
//!
//! Exercising arithmetic, ranking and aggregation together, the way a caller combines them.
pub mod aggregation;
