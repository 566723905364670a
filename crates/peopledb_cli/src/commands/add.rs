//! Add command implementation.

use peopledb_codec::is_encodable_name;
use peopledb_core::{save, PersonName, MAX_NAME_LEN};
use std::path::Path;
use tracing::info;

/// Runs the add command.
pub fn run(
    path: &Path,
    name: &str,
    age: i32,
    weight: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    if !is_encodable_name(name) {
        return Err(format!("Name {name:?} cannot contain commas or line breaks").into());
    }
    if PersonName::would_truncate(name) {
        println!("Name is longer than {MAX_NAME_LEN} characters and will be truncated");
    }

    let mut store = super::open_or_create(path)?;
    store.insert(name, age, weight)?;
    let written = save(&store, path)?;

    info!(path = %path.display(), records = written, "added person");
    if let Some(person) = store.iter().last() {
        println!("Added {} at index {}", person, store.len() - 1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopledb_core::load;
    use tempfile::TempDir;

    #[test]
    fn add_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");

        run(&path, "Alice", 30, 62.5).unwrap();
        run(&path, "Bob", 20, 80.0).unwrap();

        let store = load(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().name(), &"Bob");
    }

    #[test]
    fn invalid_person_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        run(&path, "Alice", 30, 62.5).unwrap();

        assert!(run(&path, "Old", 151, 70.0).is_err());
        assert!(run(&path, "Heavy", 30, 250.0).is_err());
        assert_eq!(load(&path).unwrap().len(), 1);
    }

    #[test]
    fn comma_in_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        assert!(run(&path, "Smith, John", 30, 62.5).is_err());
        assert!(!path.exists());
    }
}
