//! Backend A tree builder, working directly on `serde_json::Map`
//!
//! Builds the result tree in its final wire representation. Relies on
//! serde_json's `preserve_order` feature so keys keep first-insertion order.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use serde_json::map::Entry;
use serde_json::{Map, Value};

use super::{split_path, TreeSink};
use crate::error::{Error, Result};
use crate::types::Scalar;

/// Result-tree builder backed by `serde_json::Map`
#[derive(Debug, Default)]
pub(crate) struct JsonTreeBuilder {
    root: Map<String, Value>,
}

impl TreeSink for JsonTreeBuilder {
    fn new() -> Self {
        JsonTreeBuilder { root: Map::new() }
    }

    fn insert(&mut self, path: &str, value: Scalar) -> Result<()> {
        let segments = split_path(path)?;
        let (last, intermediates) = segments.split_last().expect("split_path yields >= 1 segment");

        let mut current = &mut self.root;
        for segment in intermediates {
            current = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .ok_or_else(|| {
                    Error::path_conflict(path, format!("segment '{segment}' holds a scalar"))
                })?;
        }

        if current.contains_key(*last) {
            return Err(Error::path_conflict(
                path,
                "an entry already exists at this path",
            ));
        }
        current.insert(last.to_string(), value.into());
        Ok(())
    }

    fn attach(&mut self, child: Self) -> Result<()> {
        merge_into(&mut self.root, child.root, "")
    }

    fn finish(self) -> Value {
        Value::Object(self.root)
    }
}

/// Union-merge `src` into `dst`, recursing through shared branches
///
/// Leaves are never overwritten; any collision other than branch-with-branch
/// is a path conflict.
fn merge_into(dst: &mut Map<String, Value>, src: Map<String, Value>, prefix: &str) -> Result<()> {
    for (key, value) in src {
        let at = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match dst.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (Value::Object(existing), Value::Object(incoming)) => {
                    merge_into(existing, incoming, &at)?;
                }
                _ => {
                    return Err(Error::path_conflict(
                        at,
                        "merge would overwrite an existing entry",
                    ));
                }
            },
        }
    }
    Ok(())
}
