//! Test fixtures and data file helpers.

use peopledb_core::{save, PeopleStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rows of the sample store, in insertion order.
pub const SAMPLE_ROWS: [(&str, i32, f64); 5] = [
    ("Alice", 30, 62.5),
    ("Bob", 20, 80.25),
    ("Carol", 25, 55.0),
    ("Dmitri", 41, 92.75),
    ("Eve", 19, 48.5),
];

/// A data file path inside a temporary directory that is removed on drop.
pub struct TestDataFile {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TestDataFile {
    /// Creates a path to a file that does not exist yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self {
            path: temp_dir.path().join("people.csv"),
            _temp_dir: temp_dir,
        }
    }

    /// Creates a file holding `contents`.
    pub fn with_contents(contents: &str) -> Self {
        let file = Self::new();
        fs::write(&file.path, contents).expect("Failed to write data file");
        file
    }

    /// Creates a file holding the saved `store`.
    pub fn with_store(store: &PeopleStore) -> Self {
        let file = Self::new();
        save(store, &file.path).expect("Failed to save store");
        file
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the file has been created.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the whole file.
    pub fn read_to_string(&self) -> String {
        fs::read_to_string(&self.path).expect("Failed to read data file")
    }

    /// Reads the file as lines without terminators.
    pub fn read_lines(&self) -> Vec<String> {
        self.read_to_string().lines().map(str::to_string).collect()
    }
}

impl Default for TestDataFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a store holding [`SAMPLE_ROWS`].
pub fn sample_store() -> PeopleStore {
    store_from_rows(&SAMPLE_ROWS)
}

/// Builds a store from `(name, age, weight)` rows, all of which must be valid.
pub fn store_from_rows(rows: &[(&str, i32, f64)]) -> PeopleStore {
    let mut store = PeopleStore::new().expect("Failed to create store");
    for &(name, age, weight) in rows {
        store
            .insert(name, age, weight)
            .expect("Sample row should be valid");
    }
    store
}

/// Returns the names in store order.
pub fn names(store: &PeopleStore) -> Vec<String> {
    store.iter().map(|p| p.name().to_string()).collect()
}

/// Runs a test with a fresh data file path.
pub fn with_data_file<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let file = TestDataFile::new();
    f(file.path())
}
