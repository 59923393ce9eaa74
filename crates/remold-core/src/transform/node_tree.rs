//! Backend B tree builder, working on an `IndexMap`-based node tree
//!
//! Builds the result in an internal representation first and converts to
//! `serde_json::Value` once the walk completes. Behaviorally equivalent to
//! the `serde_json::Map` backend; only the representation differs.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{split_path, TreeSink};
use crate::error::{Error, Result};
use crate::types::Scalar;

/// One node of the internal result tree
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TreeNode {
    Leaf(Scalar),
    Branch(IndexMap<String, TreeNode>),
}

impl TreeNode {
    fn into_value(self) -> Value {
        match self {
            TreeNode::Leaf(scalar) => scalar.into(),
            TreeNode::Branch(children) => {
                let mut map = Map::with_capacity(children.len());
                for (key, child) in children {
                    map.insert(key, child.into_value());
                }
                Value::Object(map)
            }
        }
    }
}

/// Result-tree builder backed by an `IndexMap` node tree
#[derive(Debug, Default)]
pub(crate) struct NodeTreeBuilder {
    root: IndexMap<String, TreeNode>,
}

impl TreeSink for NodeTreeBuilder {
    fn new() -> Self {
        NodeTreeBuilder {
            root: IndexMap::new(),
        }
    }

    fn insert(&mut self, path: &str, value: Scalar) -> Result<()> {
        let segments = split_path(path)?;
        let (last, intermediates) = segments.split_last().expect("split_path yields >= 1 segment");

        let mut current = &mut self.root;
        for segment in intermediates {
            let node = current
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::Branch(IndexMap::new()));
            current = match node {
                TreeNode::Branch(children) => children,
                TreeNode::Leaf(_) => {
                    return Err(Error::path_conflict(
                        path,
                        format!("segment '{segment}' holds a scalar"),
                    ));
                }
            };
        }

        if current.contains_key(*last) {
            return Err(Error::path_conflict(
                path,
                "an entry already exists at this path",
            ));
        }
        current.insert(last.to_string(), TreeNode::Leaf(value));
        Ok(())
    }

    fn attach(&mut self, child: Self) -> Result<()> {
        merge_into(&mut self.root, child.root, "")
    }

    fn finish(self) -> Value {
        TreeNode::Branch(self.root).into_value()
    }
}

fn merge_into(
    dst: &mut IndexMap<String, TreeNode>,
    src: IndexMap<String, TreeNode>,
    prefix: &str,
) -> Result<()> {
    for (key, node) in src {
        let at = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match dst.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
            Entry::Occupied(mut slot) => match (slot.get_mut(), node) {
                (TreeNode::Branch(existing), TreeNode::Branch(incoming)) => {
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
