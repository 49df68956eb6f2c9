// src/engine.rs

use crate::domain::{FilterCriteria, Predicate, PropertyRecord};
use tracing::debug;

/// The listing dataset, loaded once at startup and only read afterwards.
///
/// Every query borrows from it and returns references into it, so results
/// never copy record content and the dataset itself is never changed.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
}

impl Catalog {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    /// Applies each supplied criterion in turn, narrowing the candidates.
    /// Input order is preserved and an empty result is a normal outcome.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&PropertyRecord> {
        let mut matches: Vec<&PropertyRecord> = self.records().iter().collect();

        for predicate in criteria.predicates() {
            matches.retain(|record| predicate.matches(record));
            debug!(?predicate, remaining = matches.len(), "applied filter");
        }

        matches
    }

    /// First record with the given id, in load order.
    pub fn find_by_id(&self, id: i64) -> Option<&PropertyRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Records in `city`, or `None` when there are none.
    pub fn find_by_city(&self, city: &str) -> Option<Vec<&PropertyRecord>> {
        self.select(Predicate::city(city))
    }

    /// Records in `state`, or `None` when there are none.
    pub fn find_by_state(&self, state: &str) -> Option<Vec<&PropertyRecord>> {
        self.select(Predicate::state(state))
    }

    /// Records of listing type `kind`, or `None` when there are none.
    pub fn find_by_type(&self, kind: &str) -> Option<Vec<&PropertyRecord>> {
        self.select(Predicate::kind(kind))
    }

    fn select(&self, predicate: Predicate) -> Option<Vec<&PropertyRecord>> {
        let matches: Vec<&PropertyRecord> = self
            .records
            .iter()
            .filter(|record| predicate.matches(record))
            .collect();

        (!matches.is_empty()).then_some(matches)
    }
}
