//! Sequential timing sample for one engine backend
//!
//! Timing runs are strictly sequential and single-threaded; running them on
//! the worker pool would contaminate the sample with scheduling noise.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transform::{transform, Backend};
use crate::types::Payload;

/// Number of sequential transform runs per backend
pub const TIMING_ITERATIONS: usize = 100;

/// Wall-clock statistics over a timing sample, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub min_ms: f64,
    pub max_ms: f64,
    pub avg_ms: f64,
}

impl TimingStats {
    /// Summarize a sample; `min <= avg <= max` holds for any non-empty input
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return TimingStats {
                min_ms: 0.0,
                max_ms: 0.0,
                avg_ms: 0.0,
            };
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &sample in samples {
            min = min.min(sample);
            max = max.max(sample);
            sum += sample;
        }
        TimingStats {
            min_ms: min,
            max_ms: max,
            avg_ms: sum / samples.len() as f64,
        }
    }
}

/// Run `iterations` sequential transforms and summarize their durations
///
/// A transform failure aborts the sample; only the concurrency batch
/// absorbs per-task errors.
pub(crate) fn sample_timing(
    payload: &Payload,
    backend: Backend,
    iterations: usize,
) -> Result<TimingStats> {
    let mut samples = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        let tree = transform(payload, backend)?;
        samples.push(start.elapsed().as_secs_f64() * 1_000.0);
        drop(tree);
    }
    Ok(TimingStats::from_samples(&samples))
}
