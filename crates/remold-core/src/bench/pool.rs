//! Fixed-size worker pool for the concurrency sample
//!
//! A fresh pool is created for every benchmark batch and fully drained and
//! joined before the batch returns, on success and failure paths alike.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Cooperative cancellation handle for a benchmark batch
///
/// Cloned freely; cancelling any clone cancels them all.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the batch this token is waiting on
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Fixed-size pool of worker threads fed by a task channel
///
/// The task queue is the only mutable state shared between workers, and it
/// belongs to the channel, not to the engine.
pub(crate) struct WorkerPool {
    sender: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
    halted: Arc<AtomicBool>,
}

impl WorkerPool {
    /// Spawn a pool with the given number of worker threads
    pub fn new(threads: usize) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded::<Job>();
        let halted = Arc::new(AtomicBool::new(false));
        let workers = (0..threads)
            .map(|_| {
                let receiver: Receiver<Job> = receiver.clone();
                let halted = Arc::clone(&halted);
                thread::spawn(move || {
                    while let Ok(job) = receiver.recv() {
                        // Halted pools drain remaining jobs without running them
                        // so shutdown stays prompt.
                        if halted.load(Ordering::SeqCst) {
                            continue;
                        }
                        job();
                    }
                })
            })
            .collect();
        WorkerPool {
            sender: Some(sender),
            workers,
            halted,
        }
    }

    /// Submit a task to the pool
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            let _ = sender.send(Box::new(job));
        }
    }

    /// Stop running queued tasks that have not started yet
    pub fn halt(&self) {
        self.halted.store(true, Ordering::SeqCst);
    }

    /// Close the task queue and join every worker
    pub fn shutdown(&mut self) {
        self.sender.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
