//! Per-request timing metadata
//!
//! Each request carries its own metrics record, so concurrent calls never
//! race on timing state. The record is stamped at dispatch and finalized on
//! completion; finalization is a merge that preserves the original start
//! stamp and any custom fields attached by the caller.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timing metadata for a single request
#[derive(Debug, Clone)]
pub struct RequestMetrics {
    started_at: DateTime<Utc>,
    start: Instant,
    duration: Option<Duration>,
    extra: HashMap<String, Value>,
}

impl RequestMetrics {
    /// Stamp a new record at dispatch time, carrying any caller-provided
    /// custom fields
    pub(crate) fn start_with(extra: HashMap<String, Value>) -> Self {
        Self {
            started_at: Utc::now(),
            start: Instant::now(),
            duration: None,
            extra,
        }
    }

    /// Finalize the record on completion.
    ///
    /// Only the duration is written; the start stamp and custom fields
    /// survive untouched. The monotonic clock makes the duration
    /// non-negative by construction.
    pub(crate) fn finish(&mut self) {
        self.duration = Some(self.start.elapsed());
    }

    /// Wall-clock time at which the request was dispatched
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Elapsed time between dispatch and completion, once finalized
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Elapsed milliseconds, `0` until the record is finalized
    pub fn duration_ms(&self) -> u64 {
        self.duration.map(|d| d.as_millis() as u64).unwrap_or(0)
    }

    /// Custom fields attached by the caller at dispatch time
    pub fn extra(&self) -> &HashMap<String, Value> {
        &self.extra
    }
}
