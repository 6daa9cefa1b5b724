//! Bounded arithmetic units.
//!
//! # Responsibility
//! - Compute sums that must stay inside an accepted output range.
//! - Report floor and ceiling violations as distinct error kinds.

pub mod bounded_adder;
