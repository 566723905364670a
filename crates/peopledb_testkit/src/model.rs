//! Model-based checking of [`PeopleStore`].
//!
//! A [`ModelRunner`] applies the same operations to a real store and to a
//! plain `Vec<Person>` and compares them after every step.

use crate::generators::StoreOperation;
use peopledb_core::{PeopleStore, Person, PersonComparator, SortField, SortOrder};
use std::fmt;

/// Counts gathered while running a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelReport {
    /// Inserts that were accepted.
    pub inserted: usize,
    /// Inserts that failed validation.
    pub rejected: usize,
    /// Removes that deleted a record.
    pub removed: usize,
    /// Removes whose index was out of range.
    pub missed: usize,
    /// Sorts applied.
    pub sorted: usize,
}

/// A divergence between the store and the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMismatch {
    /// Position of the failing operation in the sequence.
    pub step: usize,
    /// What differed.
    pub detail: String,
}

impl fmt::Display for ModelMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}: {}", self.step, self.detail)
    }
}

impl std::error::Error for ModelMismatch {}

/// Runs operation sequences against a store and a reference model.
pub struct ModelRunner {
    store: PeopleStore,
    model: Vec<Person>,
    report: ModelReport,
}

impl ModelRunner {
    /// Creates a runner over an empty store.
    pub fn new() -> Self {
        Self {
            store: PeopleStore::new().expect("Failed to create store"),
            model: Vec::new(),
            report: ModelReport::default(),
        }
    }

    /// Returns the store under test.
    pub fn store(&self) -> &PeopleStore {
        &self.store
    }

    /// Returns the counts so far.
    pub fn report(&self) -> ModelReport {
        self.report
    }

    /// Applies every operation, stopping at the first divergence.
    pub fn run(&mut self, ops: &[StoreOperation]) -> Result<ModelReport, ModelMismatch> {
        for (step, op) in ops.iter().enumerate() {
            self.apply(op)
                .map_err(|detail| ModelMismatch { step, detail })?;
        }
        Ok(self.report)
    }

    fn apply(&mut self, op: &StoreOperation) -> Result<(), String> {
        match op {
            StoreOperation::Insert { name, age, weight } => {
                let expected = Person::new(name, *age, *weight);
                let actual = self.store.insert(name, *age, *weight);
                match (expected, actual) {
                    (Ok(person), Ok(())) => {
                        self.model.push(person);
                        self.report.inserted += 1;
                    }
                    (Err(_), Err(e)) if e.as_validation().is_some() => {
                        self.report.rejected += 1;
                    }
                    (expected, actual) => {
                        return Err(format!(
                            "insert {name:?} {age} {weight}: model {expected:?}, store {actual:?}"
                        ));
                    }
                }
            }
            StoreOperation::Remove { index } => {
                let expected = (*index < self.model.len()).then(|| self.model.remove(*index));
                let actual = self.store.remove(*index);
                if expected != actual {
                    return Err(format!(
                        "remove {index}: model {expected:?}, store {actual:?}"
                    ));
                }
                if actual.is_some() {
                    self.report.removed += 1;
                } else {
                    self.report.missed += 1;
                }
            }
            StoreOperation::Sort { field, order } => {
                self.store.sort_by_field(*field, *order);
                self.sort_model(*field, *order)?;
                self.report.sorted += 1;
            }
        }
        self.compare()
    }

    fn sort_model(&mut self, field: SortField, order: SortOrder) -> Result<(), String> {
        if field == SortField::Weight {
            // Equal weights have no defined order; check the weights and
            // contents, then follow the store's arrangement.
            let mut expected: Vec<f64> = self.model.iter().map(Person::weight).collect();
            expected.sort_by(|a, b| a.total_cmp(b));
            if !order.is_ascending() {
                expected.reverse();
            }
            let actual: Vec<f64> = self.store.iter().map(Person::weight).collect();
            if expected != actual {
                return Err(format!("sort by weight: expected {expected:?}, got {actual:?}"));
            }
            if !same_members(&self.model, self.store.records()) {
                return Err("sort by weight changed the records".to_string());
            }
            self.model = self.store.records().to_vec();
            return Ok(());
        }

        // Bubble sort never swaps equal neighbours, so it matches a stable sort.
        match order {
            SortOrder::Ascending => self.model.sort_by(|a, b| field.compare(a, b)),
            SortOrder::Descending => self.model.sort_by(|a, b| field.compare(b, a)),
        }
        Ok(())
    }

    fn compare(&self) -> Result<(), String> {
        if self.store.len() != self.model.len() {
            return Err(format!(
                "length: model {}, store {}",
                self.model.len(),
                self.store.len()
            ));
        }
        if self.store.records() != self.model.as_slice() {
            return Err(format!(
                "records: model {:?}, store {:?}",
                self.model,
                self.store.records()
            ));
        }
        if self.store.capacity() < self.store.len() {
            return Err(format!(
                "capacity {} below length {}",
                self.store.capacity(),
                self.store.len()
            ));
        }
        Ok(())
    }
}

impl Default for ModelRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn same_members(a: &[Person], b: &[Person]) -> bool {
    a.len() == b.len() && a.iter().all(|p| {
        a.iter().filter(|q| *q == p).count() == b.iter().filter(|q| *q == p).count()
    })
}
