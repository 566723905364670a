//! # PeopleDB Core
//!
//! In-memory person record store for PeopleDB.
//!
//! This crate provides:
//! - [`Person`] records with validated age and weight and a bounded name
//! - [`PeopleStore`], an ordered, growable collection of records
//! - Pluggable comparators and an in-place bubble sort
//! - Loading and saving in the line format from [`peopledb_codec`]
//! - Chart projection of the store into labelled series
//!
//! ## Usage
//!
//! ```
//! use peopledb_core::{PeopleStore, SortField, SortOrder};
//!
//! let mut store = PeopleStore::new().unwrap();
//! store.insert("Alice", 30, 62.5).unwrap();
//! store.insert("Bob", 20, 80.0).unwrap();
//! assert!(store.insert("Nobody", 200, 50.0).is_err());
//!
//! store.sort_by_field(SortField::Name, SortOrder::Descending);
//! assert_eq!(store.get(0).unwrap().name(), &"Bob");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod chart;
mod compare;
mod config;
mod error;
mod person;
mod persist;
mod sort;
mod store;

pub use chart::{
    ChartError, ChartField, ChartKind, ChartPoint, ChartSeries, ChartSink, ParseChartFieldError,
    ParseChartKindError,
};
pub use compare::{by_age, by_name, by_weight, ParseSortFieldError, PersonComparator, SortField};
pub use config::{StoreConfig, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY};
pub use error::{CoreError, CoreResult, ValidationError};
pub use person::{
    validate, Person, PersonName, MAX_AGE, MAX_NAME_LEN, MAX_WEIGHT, MIN_AGE, MIN_WEIGHT,
};
pub use persist::{load, load_with_report, read_records, save, write_records, LoadReport};
pub use sort::{bubble_sort, ParseSortOrderError, SortOrder};
pub use store::PeopleStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
