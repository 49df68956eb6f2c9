pub mod criteria;
pub mod predicate;
pub mod property;

pub use criteria::FilterCriteria;
pub use predicate::Predicate;
pub use property::PropertyRecord;
