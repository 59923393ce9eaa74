//! Remold Core - directive-driven payload reshaping with a comparative benchmark harness
//!
//! This crate maps a structured payload into a nested key/value tree. Each
//! field's destination path and emitted value are governed by per-field
//! directives: rename, prefix stripping, case transform, explicit
//! nested-path override, and default substitution.
//!
//! # Main Components
//!
//! - **Error Handling**: error types using `thiserror` and `anyhow`
//! - **Core Types**: payloads, directives, and resolved fields
//! - **Transformation Engine**: two behaviorally equivalent backends that
//!   differ only in internal tree representation
//! - **Benchmark Harness**: timing, memory, and concurrency statistics
//!   comparing the two backends
//!
//! # Example
//!
//! ```
//! use remold_core::{transform, Backend, CaseMode, Directive, Field, Payload, Result};
//!
//! fn example() -> Result<()> {
//!     let payload = Payload::new()
//!         .field(
//!             Field::scalar("user_id", "u-42")
//!                 .directive(Directive::CleanPrefix("user_".to_string())),
//!         )
//!         .field(
//!             Field::scalar("name", "John")
//!                 .directive(Directive::CaseTransform(CaseMode::Upper)),
//!         );
//!     let tree = transform(&payload, Backend::Json)?;
//!     assert_eq!(tree["id"], "u-42");
//!     assert_eq!(tree["name"], "JOHN");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod bench;
pub mod error;
pub mod schema;
pub mod transform;
pub mod types;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use schema::{transform_described, Describe};
pub use transform::{resolver::resolve, transform, Backend};
pub use types::{
    // Payload model
    CaseMode, Directive, Field, FieldValue, Payload, ResolvedField, Scalar,
};
pub use bench::{
    // Benchmark harness
    analyze, analyze_with_token, AnalysisReport, CancelToken, ConcurrencyReport,
    MemoryReport, TimingStats, CONCURRENCY_THREADS, TASKS_PER_THREAD, TIMING_ITERATIONS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
