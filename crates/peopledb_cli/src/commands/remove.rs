//! Remove command implementation.

use peopledb_core::save;
use std::path::Path;
use tracing::info;

/// Runs the remove command.
///
/// An out-of-range index is reported and the file is left untouched.
pub fn run(path: &Path, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = super::open(path)?;

    let Some(removed) = store.remove(index) else {
        println!(
            "No person at index {index} (database has {} records)",
            store.len()
        );
        return Ok(());
    };

    save(&store, path)?;
    info!(path = %path.display(), index, "removed person");
    println!("Removed {removed}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopledb_core::load;
    use tempfile::TempDir;

    #[test]
    fn remove_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "A,1,1.0\nB,2,2.0\nC,3,3.0\n").unwrap();

        run(&path, 1).unwrap();

        let store = load(&path).unwrap();
        let names: Vec<&str> = store.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn out_of_range_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "A,1,1.0\n").unwrap();

        run(&path, 5).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A,1,1.0\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(run(&dir.path().join("nope.csv"), 0).is_err());
    }
}
