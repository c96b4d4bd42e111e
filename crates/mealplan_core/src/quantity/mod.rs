//! Unit classification and human-friendly quantity rounding.
//!
//! # Responsibility
//! - Classify free-text units into a small semantic category set.
//! - Round raw aggregated amounts into values a shopper can act on.
//!
//! # Invariants
//! - Every function in this module is pure and infallible.
//! - Invalid numeric input degrades to `0`, never to an error.

pub mod human;
pub mod unit;
