//! Sort command implementation.

use super::render::write_table;
use peopledb_core::{save, SortField, SortOrder};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Runs the sort command.
pub fn run(
    path: &Path,
    field: SortField,
    order: SortOrder,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = super::open(path)?;
    store.sort_by_field(field, order);

    if dry_run {
        println!("(dry run - file not changed)");
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_table(&mut out, store.records())?;
        out.flush()?;
        return Ok(());
    }

    let written = save(&store, path)?;
    info!(path = %path.display(), %field, %order, records = written, "sorted data file");
    println!("Sorted {written} records by {field} ({order})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopledb_core::load;
    use tempfile::TempDir;

    const DATA: &str = "A,30,1.0\nB,20,1.0\nC,25,1.0\n";

    fn names(path: &Path) -> Vec<String> {
        load(path)
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn sort_saves_new_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, DATA).unwrap();

        run(&path, SortField::Age, SortOrder::Ascending, false).unwrap();
        assert_eq!(names(&path), ["B", "C", "A"]);

        run(&path, SortField::Age, SortOrder::Descending, false).unwrap();
        assert_eq!(names(&path), ["A", "C", "B"]);
    }

    #[test]
    fn dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, DATA).unwrap();

        run(&path, SortField::Name, SortOrder::Descending, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DATA);
    }
}
