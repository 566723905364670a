//! The growable person store.

use crate::compare::{PersonComparator, SortField};
use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::person::Person;
use crate::sort::{bubble_sort, SortOrder};
use tracing::debug;

/// An ordered, growable collection of [`Person`] records.
///
/// The store owns every record it holds. Capacity starts at
/// [`StoreConfig::initial_capacity`] and is multiplied by
/// [`StoreConfig::growth_factor`] only when an insert finds the store full.
/// Removing records never gives capacity back.
///
/// Read access hands out borrows, so a view cannot outlive the next
/// mutating call.
///
/// # Example
///
/// ```
/// use peopledb_core::{PeopleStore, SortField, SortOrder};
///
/// let mut store = PeopleStore::new().unwrap();
/// store.insert("Alice", 30, 62.5).unwrap();
/// store.insert("Bob", 20, 80.0).unwrap();
///
/// store.sort(&SortField::Age, SortOrder::Ascending);
/// let names: Vec<&str> = store.iter().map(|p| p.name().as_str()).collect();
/// assert_eq!(names, ["Bob", "Alice"]);
/// ```
#[derive(Debug)]
pub struct PeopleStore {
    records: Vec<Person>,
    capacity: usize,
    growth_factor: usize,
}

impl PeopleStore {
    /// Creates an empty store with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Allocation`] if the initial slots cannot be
    /// reserved.
    pub fn new() -> CoreResult<Self> {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Allocation`] if the initial slots cannot be
    /// reserved.
    pub fn with_config(config: StoreConfig) -> CoreResult<Self> {
        let capacity = config.initial_capacity.max(1);
        let mut records = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| CoreError::allocation(capacity))?;

        Ok(Self {
            records,
            capacity,
            growth_factor: config.growth_factor.max(2),
        })
    }

    /// Validates and appends a new record.
    ///
    /// The name is silently truncated to [`crate::MAX_NAME_LEN`] characters.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`] if age or weight is out of range; the
    ///   store is left unchanged
    /// - [`CoreError::Allocation`] if the store is full and cannot grow
    pub fn insert(&mut self, name: impl AsRef<str>, age: i32, weight: f64) -> CoreResult<()> {
        let person = Person::new(name, age, weight)?;
        self.insert_person(person)
    }

    /// Appends an already validated record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Allocation`] if the store is full and cannot grow.
    pub fn insert_person(&mut self, person: Person) -> CoreResult<()> {
        if self.records.len() >= self.capacity {
            self.grow()?;
        }
        self.records.push(person);
        Ok(())
    }

    /// Removes the record at `index`, shifting later records one slot left.
    ///
    /// Returns `None` and leaves the store untouched if `index` is out of
    /// range.
    pub fn remove(&mut self, index: usize) -> Option<Person> {
        if index >= self.records.len() {
            return None;
        }
        Some(self.records.remove(index))
    }

    /// Sorts the records in place.
    pub fn sort<C>(&mut self, comparator: &C, order: SortOrder)
    where
        C: PersonComparator + ?Sized,
    {
        let swaps = bubble_sort(&mut self.records, comparator, order);
        debug!(len = self.records.len(), swaps, %order, "sorted store");
    }

    /// Sorts the records in place by one of the built-in fields.
    pub fn sort_by_field(&mut self, field: SortField, order: SortOrder) {
        self.sort(&field, order);
    }

    /// Removes every record, keeping the current capacity.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns an iterator over the records in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn records(&self) -> &[Person] {
        &self.records
    }

    /// Returns the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Person> {
        self.records.get(index)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of record slots currently reserved.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn grow(&mut self) -> CoreResult<()> {
        let new_capacity = self
            .capacity
            .checked_mul(self.growth_factor)
            .ok_or(CoreError::allocation(usize::MAX))?;
        let additional = new_capacity - self.records.len();
        self.records
            .try_reserve_exact(additional)
            .map_err(|_| CoreError::allocation(new_capacity))?;

        debug!(from = self.capacity, to = new_capacity, "grew store");
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PeopleStore {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
