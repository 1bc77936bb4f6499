// File: crates/dashboard-core/src/error.rs
// Summary: Error types for dataset validation and tag parsing.

use thiserror::Error;

use crate::dataset::CityId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("series {0} has no observations")]
    Empty(CityId),
    #[error("series {city} has {actual} observations, expected one per period ({expected})")]
    LengthMismatch { city: CityId, expected: usize, actual: usize },
    #[error("series {city} has invalid value {value} at period {index}")]
    InvalidValue { city: CityId, index: usize, value: f64 },
}

/// A language or city tag outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag '{0}'")]
pub struct UnknownTag(pub String);
