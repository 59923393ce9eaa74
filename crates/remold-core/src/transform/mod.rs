//! The transformation engine: directive resolution plus path-tree assembly
//!
//! Walks a payload's ordered field list, resolves each field's output path
//! and value through the directive [`resolver`], and assembles the result
//! tree through one of two interchangeable backends. The backends share the
//! resolution walk and differ only in their internal tree representation,
//! which is what makes the comparative benchmark in [`crate::bench`]
//! meaningful.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

pub mod resolver;

mod json_tree;
mod node_tree;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{FieldValue, Payload};
use json_tree::JsonTreeBuilder;
use node_tree::NodeTreeBuilder;

/// Selects which engine backend assembles the result tree
///
/// Selection is an explicit tagged variant made once at the call site; the
/// backends are behaviorally equivalent and exist for comparative
/// benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Backend {
    /// Backend A: builds `serde_json::Map` objects directly
    Json,
    /// Backend B: builds an internal `IndexMap` node tree, converted on completion
    Node,
}

impl Backend {
    /// Both backends, in benchmark-report order
    pub const ALL: [Backend; 2] = [Backend::Json, Backend::Node];
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Json => write!(f, "json"),
            Backend::Node => write!(f, "node"),
        }
    }
}

/// Sink for result-tree assembly; one implementation per backend
///
/// Paths handed to a sink are absolute from the result root. `attach` is a
/// pure union merge: siblings coexist, and any would-be overwrite surfaces
/// as [`Error::PathConflict`].
pub(crate) trait TreeSink: Sized {
    fn new() -> Self;
    fn insert(&mut self, path: &str, value: crate::types::Scalar) -> Result<()>;
    fn attach(&mut self, child: Self) -> Result<()>;
    fn finish(self) -> Value;
}

/// Transform a payload into its result tree using the given backend
///
/// The payload is read-only throughout; the returned tree is owned by the
/// caller and computed fresh on every call.
pub fn transform(payload: &Payload, backend: Backend) -> Result<Value> {
    match backend {
        Backend::Json => {
            let mut sink = JsonTreeBuilder::new();
            walk(payload, "", &mut sink)?;
            Ok(sink.finish())
        }
        Backend::Node => {
            let mut sink = NodeTreeBuilder::new();
            walk(payload, "", &mut sink)?;
            Ok(sink.finish())
        }
    }
}

/// Recursive field walk shared by both backends
///
/// Scalar fields resolve and insert at their absolute path. Composite fields
/// recurse with `parent_path` set to their resolved path, building a child
/// tree (still keyed by absolute paths, so `NestedPath` stays a total
/// override at any depth) that is then attached to the parent tree.
fn walk<S: TreeSink>(payload: &Payload, parent_path: &str, sink: &mut S) -> Result<()> {
    for field in payload.fields() {
        match &field.value {
            FieldValue::Scalar(raw) => {
                let resolved = resolver::resolve(&field.name, raw, parent_path, &field.directives);
                log::debug!("field '{}' resolved to '{}'", field.name, resolved.path);
                sink.insert(&resolved.path, resolved.value)?;
            }
            FieldValue::Composite(child) => {
                let path = resolver::resolve_path(&field.name, parent_path, &field.directives);
                log::debug!("descending into composite field '{}' at '{path}'", field.name);
                let mut child_sink = S::new();
                walk(child, &path, &mut child_sink)?;
                sink.attach(child_sink)?;
            }
        }
    }
    Ok(())
}

/// Split a dotted path into its segments, rejecting empty segments
pub(crate) fn split_path(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(Error::path_conflict(path, "empty path"));
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(Error::path_conflict(path, "empty path segment"));
    }
    Ok(segments)
}
