//! Loading and saving stores in the line format.
//!
//! See [`peopledb_codec`] for the format itself. Saving encodes every
//! record before the destination is opened. A record whose name holds a
//! separator cannot be represented in the format; it is left out of the
//! file with a warning and the rest are written. I/O failures after the
//! file is open are not rolled back.
//!
//! Loading always builds a fresh store. Lines that do not parse, and
//! records that fail validation, are skipped without error.

use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::person::Person;
use crate::store::PeopleStore;
use peopledb_codec::{LineDecoder, LineEncoder, ToFields};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Counts gathered while loading a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that became records.
    pub admitted: usize,
    /// Lines that did not have the `name,age,weight` shape.
    pub malformed: usize,
    /// Well-formed lines whose age or weight was out of range.
    pub rejected: usize,
}

impl LoadReport {
    /// Total number of lines read.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.admitted + self.malformed + self.rejected
    }

    /// Number of lines that did not become records.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.malformed + self.rejected
    }
}

/// Writes every record to `path`, one line each, in store order.
///
/// The file is created or truncated. Returns the number of records written,
/// which is less than [`PeopleStore::len`] when some names contain a comma
/// or a line break.
///
/// # Errors
///
/// - [`CoreError::FileOpen`] if the destination cannot be opened
/// - [`CoreError::Io`] if writing fails part way through
pub fn save(store: &PeopleStore, path: impl AsRef<Path>) -> CoreResult<usize> {
    let path = path.as_ref();
    let encoded = encode_all(store);

    let file = File::create(path).map_err(|e| CoreError::file_open(path, e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(encoded.as_str().as_bytes())?;
    writer.flush()?;

    debug!(path = %path.display(), records = encoded.line_count(), "saved store");
    Ok(encoded.line_count())
}

/// Writes every record to `writer`, one line each, in store order.
///
/// Records with unencodable names are skipped, as in [`save`].
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the writer fails.
pub fn write_records<W: Write>(store: &PeopleStore, mut writer: W) -> CoreResult<usize> {
    let encoded = encode_all(store);
    writer.write_all(encoded.as_str().as_bytes())?;
    writer.flush()?;
    Ok(encoded.line_count())
}

fn encode_all(store: &PeopleStore) -> LineEncoder {
    let mut encoder = LineEncoder::with_capacity(store.len());
    for (index, person) in store.iter().enumerate() {
        if let Err(e) = encoder.encode(&person.to_fields()) {
            warn!(index, error = %e, "record left out of saved file");
        }
    }
    encoder
}

/// Builds a new store from the file at `path`.
///
/// # Errors
///
/// - [`CoreError::FileOpen`] if the source cannot be opened
/// - [`CoreError::Io`] if reading fails
/// - [`CoreError::Allocation`] if the store cannot grow
pub fn load(path: impl AsRef<Path>) -> CoreResult<PeopleStore> {
    load_with_report(path, StoreConfig::default()).map(|(store, _)| store)
}

/// Builds a new store from the file at `path` and reports what was skipped.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with_report(
    path: impl AsRef<Path>,
    config: StoreConfig,
) -> CoreResult<(PeopleStore, LoadReport)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CoreError::file_open(path, e))?;
    let (store, report) = read_records(BufReader::new(file), config)?;

    debug!(
        path = %path.display(),
        admitted = report.admitted,
        malformed = report.malformed,
        rejected = report.rejected,
        "loaded store"
    );
    Ok((store, report))
}

/// Builds a new store from line-formatted text.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if reading fails or [`CoreError::Allocation`]
/// if the store cannot grow.
pub fn read_records<R: BufRead>(
    reader: R,
    config: StoreConfig,
) -> CoreResult<(PeopleStore, LoadReport)> {
    let mut store = PeopleStore::with_config(config)?;
    let mut report = LoadReport::default();

    for line in LineDecoder::new(reader) {
        let line = line?;
        let fields = match line.result {
            Ok(fields) => fields,
            Err(e) => {
                trace!(line = line.number, error = %e, "skipping line");
                report.malformed += 1;
                continue;
            }
        };
        match Person::try_from(fields) {
            Ok(person) => {
                store.insert_person(person)?;
                report.admitted += 1;
            }
            Err(e) => {
                trace!(line = line.number, error = %e, "dropping record");
                report.rejected += 1;
            }
        }
    }

    Ok((store, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn sample_store() -> PeopleStore {
        let mut store = PeopleStore::new().unwrap();
        store.insert("Alice", 30, 62.5).unwrap();
        store.insert("Bob", 20, 80.25).unwrap();
        store.insert("Carol", 25, 55.0).unwrap();
        store
    }

    fn read(text: &str) -> (PeopleStore, LoadReport) {
        read_records(Cursor::new(text), StoreConfig::default()).unwrap()
    }

    #[test]
    fn write_produces_expected_lines() {
        let mut out = Vec::new();
        let written = write_records(&sample_store(), &mut out).unwrap();
        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Alice,30,62.500000\nBob,20,80.250000\nCarol,25,55.000000\n"
        );
    }

    #[test]
    fn empty_store_writes_nothing() {
        let mut out = Vec::new();
        let store = PeopleStore::new().unwrap();
        assert_eq!(write_records(&store, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        let store = sample_store();

        assert_eq!(save(&store, &path).unwrap(), 3);
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.records(), store.records());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "Old,1,1.0\nOlder,2,2.0\nOldest,3,3.0\nStale,4,4.0\n").unwrap();

        let mut store = PeopleStore::new().unwrap();
        store.insert("New", 5, 5.0).unwrap();
        save(&store, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "New,5,5.000000\n");
    }

    #[test]
    fn unencodable_name_is_left_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        let mut store = PeopleStore::new().unwrap();
        store.insert("Alice", 30, 62.5).unwrap();
        store.insert("Smith, John", 40, 90.0).unwrap();
        store.insert("Bob", 20, 80.25).unwrap();

        assert_eq!(save(&store, &path).unwrap(), 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Alice,30,62.500000\nBob,20,80.250000\n"
        );
        assert_eq!(store.len(), 3);

        let loaded = load(&path).unwrap();
        let names: Vec<&str> = loaded.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn line_break_in_name_does_not_split_records() {
        let mut store = PeopleStore::new().unwrap();
        store.insert("Eve\nMallory,1,1", 22, 55.0).unwrap();
        store.insert("Carol", 25, 55.0).unwrap();

        let mut out = Vec::new();
        assert_eq!(write_records(&store, &mut out).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Carol,25,55.000000\n");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("people.csv");
        let err = save(&sample_store(), &path).unwrap_err();
        assert!(matches!(err, CoreError::FileOpen { .. }));
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CoreError::FileOpen { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn non_numeric_age_is_skipped() {
        let (store, report) = read("Alice,30,62.5\nBob,abc,80.0\nCarol,25,55.0\n");
        assert_eq!(store.len(), 2);
        assert_eq!(report.malformed, 1);
        let names: Vec<&str> = store.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Alice", "Carol"]);
    }

    #[test]
    fn out_of_range_records_are_dropped() {
        let (store, report) = read("Old,151,70.0\nHeavy,30,250.0\nNeg,-1,70.0\nOk,30,70.0\n");
        assert_eq!(store.len(), 1);
        assert_eq!(report.rejected, 3);
        assert_eq!(report.admitted, 1);
        assert_eq!(report.lines(), 4);
        assert_eq!(report.skipped(), 3);
    }

    #[test]
    fn blank_and_garbage_lines_are_skipped() {
        let (store, report) = read("\n\nnot a record\n,1,1\nA,1,1.0,extra\nB,2,2.0");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().name(), &"B");
        assert_eq!(report.malformed, 5);
    }

    #[test]
    fn long_names_are_truncated_on_load() {
        let line = format!("{},30,70.0\n", "n".repeat(60));
        let (store, _) = read(&line);
        assert_eq!(store.get(0).unwrap().name().char_count(), crate::MAX_NAME_LEN);
    }

    #[test]
    fn load_grows_past_initial_capacity() {
        let text: String = (0..25).map(|i| format!("P{i},{i},{i}.5\n")).collect();
        let (store, report) = read(&text);
        assert_eq!(store.len(), 25);
        assert_eq!(store.capacity(), 40);
        assert_eq!(report.admitted, 25);
    }

    #[test]
    fn load_uses_given_config() {
        let config = StoreConfig::new().initial_capacity(1);
        let (store, _) = read_records(Cursor::new("A,1,1\nB,2,2\nC,3,3\n"), config).unwrap();
        assert_eq!(store.capacity(), 4);
    }

    #[test]
    fn weight_precision_is_six_digits() {
        let mut store = PeopleStore::new().unwrap();
        store.insert("Third", 30, 200.0 / 3.0).unwrap();

        let mut out = Vec::new();
        write_records(&store, &mut out).unwrap();
        let (loaded, _) = read_records(Cursor::new(out), StoreConfig::default()).unwrap();
        assert_eq!(loaded.get(0).unwrap().weight(), 66.666667);
    }
}
