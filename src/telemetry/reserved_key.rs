// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Separation of a reserved key from its dynamically-named siblings.
//!
//! `OctoPrint` keeps an open set of tool keys next to a single well-known key
//! (`history`, `time`) in the same object. The split borrows the parsed value
//! once and hands each bucket to a typed decoder, so the input is never
//! re-encoded or mutated.

use serde_json::{Map, Value};

use crate::error::ParseError;

/// Label used in error paths for the payload itself.
pub(crate) const ROOT: &str = "<root>";

/// An object split into its reserved entry and everything else.
///
/// # Examples
///
/// ```
/// use octor_lib::telemetry::split_reserved_key;
/// use serde_json::json;
///
/// let value = json!({"time": 1610000000, "tool0": {"actual": 199.0}});
/// let split = split_reserved_key(&value, "time").unwrap();
///
/// assert_eq!(split.reserved(), Some(&json!(1610000000)));
/// assert_eq!(split.rest().len(), 1);
/// assert_eq!(
///     split.into_value("time", "tools"),
///     json!({"time": 1610000000, "tools": {"tool0": {"actual": 199.0}}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReservedSplit<'a> {
    reserved: Option<&'a Value>,
    rest: Vec<(&'a str, &'a Value)>,
}

impl<'a> ReservedSplit<'a> {
    pub(crate) fn from_object(object: &'a Map<String, Value>, reserved: &str) -> Self {
        let mut reserved_value = None;
        let mut rest = Vec::with_capacity(object.len());

        for (key, value) in object {
            if key == reserved {
                reserved_value = Some(value);
            } else {
                rest.push((key.as_str(), value));
            }
        }

        Self {
            reserved: reserved_value,
            rest,
        }
    }

    /// Returns the value stored under the reserved key, if present.
    #[must_use]
    pub fn reserved(&self) -> Option<&'a Value> {
        self.reserved
    }

    /// Returns every other entry, in the order of the source object.
    #[must_use]
    pub fn rest(&self) -> &[(&'a str, &'a Value)] {
        &self.rest
    }

    /// Builds the two-bucket object.
    ///
    /// The result has exactly two keys when the names differ: `reserved_name`
    /// holds the reserved value (`null` when it was absent), and `rest_name`
    /// holds an object with the remaining entries, copied verbatim.
    #[must_use]
    pub fn into_value(self, reserved_name: &str, rest_name: &str) -> Value {
        let rest: Map<String, Value> = self
            .rest
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();

        let mut buckets = Map::with_capacity(2);
        buckets.insert(rest_name.to_string(), Value::Object(rest));
        buckets.insert(
            reserved_name.to_string(),
            self.reserved.cloned().unwrap_or(Value::Null),
        );
        Value::Object(buckets)
    }
}

/// Splits a JSON object on a reserved key.
///
/// # Errors
///
/// Returns `ParseError::TypeMismatch` if `value` is not an object.
pub fn split_reserved_key<'a>(
    value: &'a Value,
    reserved: &str,
) -> Result<ReservedSplit<'a>, ParseError> {
    let object = expect_object(value, "")?;
    Ok(ReservedSplit::from_object(object, reserved))
}

/// Returns the object behind `value`, or a type mismatch naming `path`.
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ParseError> {
    value.as_object().ok_or_else(|| ParseError::TypeMismatch {
        field: display_path(path),
        expected: "object",
        actual: json_kind(value),
    })
}

/// Joins a parent path and a key (`history[0]` + `tool0`).
pub(crate) fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub(crate) fn display_path(path: &str) -> String {
    if path.is_empty() {
        ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Name of the JSON kind of `value`, for error messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
