// Analytics: read-only aggregates over the job and application collections.

pub mod handlers;
pub mod stats;
