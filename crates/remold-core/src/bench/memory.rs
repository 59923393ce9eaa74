//! Best-effort heap sampling for the memory benchmark
//!
//! A counting wrapper around the system allocator tracks net heap-in-use
//! for the whole process. The per-backend delta it yields is noisy and
//! allocator dependent; treat it as an indicator, never as an authoritative
//! measurement. There is no collector to force a reclamation pass against:
//! Rust frees eagerly, so sampling the gauge directly is the closest
//! equivalent.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transform::{transform, Backend};
use crate::types::Payload;

static HEAP_IN_USE: AtomicUsize = AtomicUsize::new(0);

/// System allocator wrapper that maintains a net heap-in-use gauge
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            HEAP_IN_USE.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        HEAP_IN_USE.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            HEAP_IN_USE.fetch_add(new_size, Ordering::Relaxed);
            HEAP_IN_USE.fetch_sub(layout.size(), Ordering::Relaxed);
        }
        new_ptr
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

/// Net bytes currently allocated through the global allocator
pub fn heap_in_use() -> usize {
    HEAP_IN_USE.load(Ordering::Relaxed)
}

/// Heap delta observed across one transform per backend, in KiB
///
/// Best-effort: concurrent allocations elsewhere in the process bleed into
/// the delta, and a delta may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryReport {
    pub json_delta_kb: i64,
    pub node_delta_kb: i64,
}

pub(crate) fn sample_memory(payload: &Payload) -> Result<MemoryReport> {
    Ok(MemoryReport {
        json_delta_kb: delta_for(payload, Backend::Json)?,
        node_delta_kb: delta_for(payload, Backend::Node)?,
    })
}

fn delta_for(payload: &Payload, backend: Backend) -> Result<i64> {
    let before = heap_in_use() as i64;
    let tree = transform(payload, backend)?;
    let after = heap_in_use() as i64;
    drop(tree);
    Ok((after - before) / 1024)
}
