// src/domain/predicate.rs

use crate::domain::criteria::FilterCriteria;
use crate::domain::property::PropertyRecord;

/// A single-field test against a record. String variants hold the value
/// already normalized for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    MinPrice(f64),
    MaxPrice(f64),
    MinBedrooms(i64),
    Kind(String),
    State(String),
    City(String),
}

impl Predicate {
    pub fn kind(kind: &str) -> Self {
        Predicate::Kind(kind.to_lowercase())
    }

    pub fn state(state: &str) -> Self {
        Predicate::State(state.to_uppercase())
    }

    pub fn city(city: &str) -> Self {
        Predicate::City(city.to_lowercase())
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        match self {
            Predicate::MinPrice(min) => record.price() >= *min,
            Predicate::MaxPrice(max) => record.price() <= *max,
            Predicate::MinBedrooms(n) => i64::from(record.bedrooms()) >= *n,
            Predicate::Kind(kind) => record.kind().to_lowercase() == *kind,
            Predicate::State(state) => record.state().to_uppercase() == *state,
            Predicate::City(city) => record.city().to_lowercase() == *city,
        }
    }
}

impl FilterCriteria {
    /// The supplied criteria as predicates, in evaluation order:
    /// min price, max price, bedrooms, type, state, city.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut out = Vec::new();

        if let Some(min) = self.min_price {
            out.push(Predicate::MinPrice(min));
        }
        if let Some(max) = self.max_price {
            out.push(Predicate::MaxPrice(max));
        }
        if let Some(n) = self.bedrooms {
            out.push(Predicate::MinBedrooms(n));
        }
        if let Some(kind) = &self.kind {
            out.push(Predicate::kind(kind));
        }
        if let Some(state) = &self.state {
            out.push(Predicate::state(state));
        }
        if let Some(city) = &self.city {
            out.push(Predicate::city(city));
        }

        out
    }
}
