//! Schema descriptor capability
//!
//! The engine consumes an ordered list of (name, value, directives) per
//! object. This module defines that boundary as an explicit trait rather
//! than runtime introspection: a type describes its own fields, by hand or
//! through generated code, and the description may fail if a field cannot
//! be read.

use serde_json::Value;

use crate::error::Result;
use crate::transform::{transform, Backend};
use crate::types::Payload;

/// Produces the ordered field description the engine consumes
///
/// Implementations return the complete payload tree for a value, with each
/// field's directives attached. An inaccessible field surfaces as
/// [`crate::Error::SchemaAccess`], which aborts the whole transformation.
pub trait Describe {
    fn describe(&self) -> Result<Payload>;
}

impl Describe for Payload {
    fn describe(&self) -> Result<Payload> {
        Ok(self.clone())
    }
}

/// Describe a value and transform the resulting payload in one step
pub fn transform_described<T: Describe + ?Sized>(input: &T, backend: Backend) -> Result<Value> {
    let payload = input.describe()?;
    transform(&payload, backend)
}
