//! Benchmark utilities.

use peopledb_codec::RecordFields;
use peopledb_core::{PeopleStore, StoreConfig};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random name of `len` alphanumeric characters.
pub fn random_name(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generate `count` valid `(name, age, weight)` rows.
pub fn random_rows(count: usize) -> Vec<(String, i32, f64)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let name_len = rng.gen_range(3..=20);
            (
                random_name(name_len),
                rng.gen_range(0..=150),
                rng.gen_range(0.0..=200.0),
            )
        })
        .collect()
}

/// Generate `count` record fields ready for encoding.
pub fn random_fields(count: usize) -> Vec<RecordFields> {
    random_rows(count)
        .into_iter()
        .map(|(name, age, weight)| RecordFields::new(name, age, weight))
        .collect()
}

/// Build a store holding `count` random records.
pub fn random_store(count: usize) -> PeopleStore {
    let mut store = PeopleStore::with_config(StoreConfig::new().initial_capacity(count))
        .expect("Failed to create store");
    for (name, age, weight) in random_rows(count) {
        store
            .insert(name, age, weight)
            .expect("Generated row should be valid");
    }
    store
}
