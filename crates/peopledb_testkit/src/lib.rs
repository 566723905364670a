//! # PeopleDB Testkit
//!
//! Test utilities for PeopleDB.
//!
//! This crate provides:
//! - Temporary data files and sample stores
//! - Property-based test generators using proptest
//! - A model runner that checks a store against a plain `Vec`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use peopledb_testkit::prelude::*;
//!
//! #[test]
//! fn saves_sample() {
//!     let file = TestDataFile::new();
//!     peopledb_core::save(&sample_store(), file.path()).unwrap();
//!     assert_eq!(file.read_lines().len(), SAMPLE_ROWS.len());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
