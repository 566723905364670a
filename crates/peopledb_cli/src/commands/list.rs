//! List command implementation.

use super::render::write_table;
use peopledb_core::Person;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Listing result for JSON output.
#[derive(Debug, Serialize)]
pub struct ListResult<'a> {
    /// Data file path.
    pub path: String,
    /// Number of records.
    pub count: usize,
    /// Records in stored order.
    pub records: &'a [Person],
}

/// Runs the list command.
pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open(path)?;

    match format {
        "json" => {
            let result = ListResult {
                path: path.display().to_string(),
                count: store.len(),
                records: store.records(),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_table(&mut out, store.records())?;
            out.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let records = vec![Person::new("Alice", 30, 62.5).unwrap()];
        let result = ListResult {
            path: "people.csv".into(),
            count: records.len(),
            records: &records,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["records"][0]["name"], "Alice");
        assert_eq!(value["records"][0]["weight"], 62.5);
    }
}
