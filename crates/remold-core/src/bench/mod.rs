//! Comparative benchmark harness for the two engine backends
//!
//! Drives both backends over one representative payload and reports timing,
//! memory, and concurrent-throughput statistics. Backend equivalence (same
//! tree for the same input) is a precondition for any of these numbers to
//! mean something; the conformance suite asserts it directly.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

pub mod memory;
pub mod pool;
pub mod timing;

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transform::{transform, Backend};
use crate::types::Payload;
use pool::WorkerPool;

pub use memory::MemoryReport;
pub use pool::CancelToken;
pub use timing::{TimingStats, TIMING_ITERATIONS};

/// Worker threads in the concurrency sample's pool
pub const CONCURRENCY_THREADS: usize = 10;
/// Tasks submitted per worker thread
pub const TASKS_PER_THREAD: usize = 5;

/// Aggregate throughput of the concurrent batch
///
/// Only the batch wall-clock and task count are meaningful; individual task
/// completion order carries no guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcurrencyReport {
    pub threads: usize,
    pub total_tasks: usize,
    pub wall_clock_ms: u128,
}

/// Full benchmark report over both backends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub json_timing: TimingStats,
    pub node_timing: TimingStats,
    pub memory: MemoryReport,
    pub concurrency: ConcurrencyReport,
}

/// Benchmark both backends against one representative payload
pub fn analyze(payload: &Payload) -> Result<AnalysisReport> {
    analyze_with_token(payload, &CancelToken::new())
}

/// [`analyze`], observing a cancellation token while the batch runs
///
/// Timing and memory samples run first, strictly sequentially; the
/// concurrency sample runs last on a pool created for this call and joined
/// before it returns.
pub fn analyze_with_token(payload: &Payload, token: &CancelToken) -> Result<AnalysisReport> {
    log::info!(
        "starting comparative analysis over {} field(s)",
        payload.len()
    );

    let json_timing = timing::sample_timing(payload, Backend::Json, TIMING_ITERATIONS)?;
    let node_timing = timing::sample_timing(payload, Backend::Node, TIMING_ITERATIONS)?;
    let memory = memory::sample_memory(payload)?;
    let concurrency = sample_concurrency(payload, token)?;

    log::info!("comparative analysis completed");
    Ok(AnalysisReport {
        json_timing,
        node_timing,
        memory,
        concurrency,
    })
}

/// Run the fixed concurrent batch and time it end to end
///
/// Tasks alternate backends by index parity (even → json, odd → node). A
/// failed task is logged and still counted as completed; cancellation shuts
/// the pool down and surfaces as [`Error::Interrupted`].
fn sample_concurrency(payload: &Payload, token: &CancelToken) -> Result<ConcurrencyReport> {
    let total_tasks = CONCURRENCY_THREADS * TASKS_PER_THREAD;
    let mut pool = WorkerPool::new(CONCURRENCY_THREADS);
    let shared = Arc::new(payload.clone());
    let (done_tx, done_rx) = crossbeam_channel::bounded::<()>(total_tasks);

    let start = Instant::now();
    for index in 0..total_tasks {
        let backend = if index % 2 == 0 {
            Backend::Json
        } else {
            Backend::Node
        };
        let payload = Arc::clone(&shared);
        let done = done_tx.clone();
        pool.execute(move || {
            if let Err(err) = transform(&payload, backend) {
                log::warn!("benchmark task {index} ({backend}) failed: {err}");
            }
            let _ = done.send(());
        });
    }
    drop(done_tx);

    let mut completed = 0;
    while completed < total_tasks {
        if token.is_cancelled() {
            pool.halt();
            pool.shutdown();
            return Err(Error::Interrupted {
                message: format!("cancelled after {completed} of {total_tasks} tasks"),
            });
        }
        match done_rx.recv_timeout(Duration::from_millis(10)) {
            Ok(()) => completed += 1,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    let wall_clock_ms = start.elapsed().as_millis();
    pool.shutdown();

    Ok(ConcurrencyReport {
        threads: CONCURRENCY_THREADS,
        total_tasks: completed,
        wall_clock_ms,
    })
}
