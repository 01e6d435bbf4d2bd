//! Read-only record repositories.
//!
//! Views query records through [`RecordSource`] and never touch the backing
//! storage. Edit and delete requests are accepted and logged so screens can
//! wire their action buttons, but the sample data itself is immutable.

use std::collections::HashSet;
use std::fmt;

use tracing::info;

use venture_model::Identified;

use crate::error::{DataError, Result};

/// Mutating action a screen asks the repository to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordAction {
    Edit,
    Delete,
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        })
    }
}

/// Result of a [`RecordSource::request`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The record exists and the request was recorded.
    Acknowledged,
    /// No record with the requested id.
    NotFound,
}

/// Read-only access to one collection of records.
pub trait RecordSource<T: Identified> {
    /// Short name of the record kind, used in logs.
    fn kind(&self) -> &'static str;

    /// All records in source order.
    fn records(&self) -> &[T];

    /// Look up a record by id.
    fn find(&self, id: &str) -> Option<&T> {
        self.records().iter().find(|record| record.id() == id)
    }

    /// Ask for a mutating action. Implementations must not change
    /// [`records`](Self::records).
    fn request(&self, action: RecordAction, id: &str) -> RequestOutcome;
}

/// Records held in memory, loaded once and queried many times.
#[derive(Debug, Clone)]
pub struct InMemorySource<T> {
    kind: &'static str,
    records: Vec<T>,
}

impl<T: Identified> InMemorySource<T> {
    /// Wrap `records`, rejecting duplicate ids.
    pub fn new(kind: &'static str, records: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DataError::DuplicateId {
                    kind,
                    id: record.id().to_string(),
                });
            }
        }
        Ok(Self { kind, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Identified> RecordSource<T> for InMemorySource<T> {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn records(&self) -> &[T] {
        &self.records
    }

    fn request(&self, action: RecordAction, id: &str) -> RequestOutcome {
        if self.find(id).is_none() {
            info!(kind = self.kind, id, %action, "request for unknown record");
            return RequestOutcome::NotFound;
        }
        info!(
            kind = self.kind,
            id,
            %action,
            "record action requested; sample data is read-only"
        );
        RequestOutcome::Acknowledged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str);

    impl Identified for Item {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = InMemorySource::new("item", vec![Item("a"), Item("b"), Item("a")]);
        match result {
            Err(DataError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "item");
                assert_eq!(id, "a");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn requests_never_mutate_records() {
        let source = InMemorySource::new("item", vec![Item("a"), Item("b")]).unwrap();
        assert_eq!(
            source.request(RecordAction::Delete, "a"),
            RequestOutcome::Acknowledged
        );
        assert_eq!(
            source.request(RecordAction::Edit, "zzz"),
            RequestOutcome::NotFound
        );
        assert_eq!(source.records(), &[Item("a"), Item("b")]);
        assert_eq!(source.find("b"), Some(&Item("b")));
    }
}
