//! Shared fixtures for data unit BDD scenarios.

use dataunit::{DataUnit, DataUnitError};
use rstest::fixture;

/// Suffix supplied by a `Given` step.
#[derive(Clone, Debug, Default)]
pub struct SuffixRequest {
    pub suffix: String,
}

/// Result of resolving the requested suffix.
#[derive(Clone, Debug)]
pub enum LookupOutcome {
    Pending,
    Resolved(DataUnit),
    Failed(DataUnitError),
}

#[fixture]
pub fn suffix_request() -> SuffixRequest {
    SuffixRequest::default()
}

#[fixture]
pub fn lookup_outcome() -> LookupOutcome {
    LookupOutcome::Pending
}
