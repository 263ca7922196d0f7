pub mod application;
pub mod job;
pub mod settings;

use serde::Deserialize;
use thiserror::Error;

/// Raised when a status string does not name a known lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {entity} status '{value}' (expected one of: {expected})")]
pub struct UnknownStatus {
    pub entity: &'static str,
    pub value: String,
    pub expected: String,
}

/// Body of `PUT /api/{jobs,applications}/:id/status`. The status is kept as a
/// raw string here and parsed by the handler so unknown values get a clear 400.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
    #[serde(default)]
    pub expected_version: Option<u64>,
}

/// `limit`/`offset` window applied to list endpoints after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub const DEFAULT_LIMIT: usize = 50;

    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Page {
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        rows.into_iter().skip(self.offset).take(self.limit).collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new(None, None)
    }
}

/// Query-string filters treat a missing value, a blank value and `all` alike.
pub fn active_filter(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}
