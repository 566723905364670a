//! Benchmarks for PeopleDB.
//!
//! The benches live under `benches/`; this library holds shared data
//! generators.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod utils;
