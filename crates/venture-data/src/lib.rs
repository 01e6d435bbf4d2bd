#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod loaders;
pub mod paths;
pub mod repository;

pub use crate::catalog::SampleCatalog;
pub use crate::error::{DataError, Result};
pub use crate::repository::{InMemorySource, RecordAction, RecordSource, RequestOutcome};
