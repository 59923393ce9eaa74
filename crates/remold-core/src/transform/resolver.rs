//! Directive resolution for a single field
//!
//! Computes a field's final output path and output value from its declared
//! directives. Path precedence is fixed, highest first: `NestedPath` (total
//! override, absolute from the result root), `Rename`, `CleanPrefix`, then
//! the declared name. The first directive of a given kind wins when a field
//! carries duplicates.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use crate::types::{CaseMode, Directive, ResolvedField, Scalar};

/// Resolve one scalar field's output path and value
pub fn resolve(
    name: &str,
    value: &Scalar,
    parent_path: &str,
    directives: &[Directive],
) -> ResolvedField {
    ResolvedField {
        path: resolve_path(name, parent_path, directives),
        value: resolve_value(value, directives),
    }
}

/// Compute the output path for a field
///
/// `NestedPath` overrides both parent path and field name; the other path
/// directives only replace the field's own segment under `parent_path`.
pub fn resolve_path(name: &str, parent_path: &str, directives: &[Directive]) -> String {
    if let Some(path) = directives.iter().find_map(|d| match d {
        Directive::NestedPath(p) => Some(p.clone()),
        _ => None,
    }) {
        return path;
    }

    let segment = directives
        .iter()
        .find_map(|d| match d {
            Directive::Rename(n) => Some(n.clone()),
            _ => None,
        })
        .or_else(|| {
            directives.iter().find_map(|d| match d {
                Directive::CleanPrefix(prefix) => Some(clean_prefix(name, prefix).to_string()),
                _ => None,
            })
        })
        .unwrap_or_else(|| name.to_string());

    join(parent_path, &segment)
}

/// Compute the output value for a field
///
/// `DefaultValue` substitutes only a null value and runs before the case
/// transform. `CaseTransform` applies to string values only; it never
/// touches path segments, regardless of which other directives are present.
pub fn resolve_value(value: &Scalar, directives: &[Directive]) -> Scalar {
    let mut resolved = if value.is_null() {
        directives
            .iter()
            .find_map(|d| match d {
                Directive::DefaultValue(v) => Some(v.clone()),
                _ => None,
            })
            .unwrap_or(Scalar::Null)
    } else {
        value.clone()
    };

    if let Scalar::String(s) = &resolved {
        if let Some(mode) = directives.iter().find_map(|d| match d {
            Directive::CaseTransform(m) => Some(*m),
            _ => None,
        }) {
            resolved = Scalar::String(match mode {
                CaseMode::Upper => s.to_uppercase(),
                CaseMode::Lower => s.to_lowercase(),
            });
        }
    }

    resolved
}

fn clean_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}.{segment}")
    }
}
