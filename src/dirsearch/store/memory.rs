use super::{RecordSource, RecordStore};
use crate::error::Result;
use crate::model::PersonRecord;

/// Records supplied directly by the caller.
/// Nothing is read from disk.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    records: Vec<PersonRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<PersonRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: PersonRecord) {
        self.records.push(record);
    }
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<RecordStore> {
        Ok(RecordStore::new(self.records.clone()))
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The three-person directory used throughout the tests:
    /// `Ana Lee`, `Bo Ng`, `Anab Roy`, in that order.
    pub fn ana_bo_anab() -> RecordStore {
        RecordStore::new(vec![
            PersonRecord::new("Ana", "Lee", "1 Elm St", "555-0100"),
            PersonRecord::new("Bo", "Ng", "2 Oak Ave", "555-0101"),
            PersonRecord::new("Anab", "Roy", "3 Pine Rd", "555-0102"),
        ])
    }

    pub struct StoreFixture {
        pub source: InMemorySource,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::default(),
            }
        }

        pub fn with_person(mut self, first: &str, last: &str) -> Self {
            let n = self.source.records.len() + 1;
            self.source.push(PersonRecord::new(
                first,
                last,
                format!("{} Test Lane", n),
                format!("555-{:04}", n),
            ));
            self
        }

        pub fn with_people(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_person(&format!("Person{}", i + 1), "Example");
            }
            self
        }

        pub fn store(&self) -> RecordStore {
            RecordStore::new(self.source.records.clone())
        }
    }
}
