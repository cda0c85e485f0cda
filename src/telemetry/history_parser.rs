// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for historic temperature samples.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::reserved_key::{ReservedSplit, display_path, expect_object, field_path, json_kind};
use super::temperature_parser::decode_tools;
use crate::error::ParseError;
use crate::types::TemperatureData;

const TIME_KEY: &str = "time";

/// One historic temperature sample.
///
/// The wire format stores the sample time as Unix epoch seconds next to the
/// tool readings: `{"time": 1610000000, "tool0": {"actual": 199.0, "target": 200.0}}`.
///
/// # Examples
///
/// ```
/// use octor_lib::telemetry::HistoricTemperatureData;
///
/// let json = r#"{"time":1610000000,"tool0":{"actual":199.0,"target":200.0}}"#;
/// let entry: HistoricTemperatureData = serde_json::from_str(json).unwrap();
///
/// assert_eq!(entry.time.to_rfc3339(), "2021-01-07T06:13:20+00:00");
/// assert_eq!(entry.tool("tool0").unwrap().actual, 199.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricTemperatureData {
    /// Time of the sample, at second resolution.
    pub time: DateTime<Utc>,

    /// Readings of every tool in the sample, keyed by tool identifier.
    pub tools: BTreeMap<String, TemperatureData>,
}

impl HistoricTemperatureData {
    /// Returns the reading of a tool in this sample.
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<&TemperatureData> {
        self.tools.get(name)
    }
}

impl<'de> Deserialize<'de> for HistoricTemperatureData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_historic_entry(&value).map_err(serde::de::Error::custom)
    }
}

/// Decodes a historic sample from an already parsed JSON value.
///
/// # Errors
///
/// Returns `ParseError` if `time` is missing, is not a number, or is out of
/// range, or if a tool entry is not a valid reading.
pub fn decode_historic_entry(value: &Value) -> Result<HistoricTemperatureData, ParseError> {
    decode_historic_entry_at(value, "")
}

pub(crate) fn decode_historic_entry_at(
    value: &Value,
    path: &str,
) -> Result<HistoricTemperatureData, ParseError> {
    let object = expect_object(value, path)?;
    let split = ReservedSplit::from_object(object, TIME_KEY);

    let time_field = field_path(path, TIME_KEY);
    let time = match split.reserved() {
        Some(raw) => epoch_to_utc(raw, &time_field)?,
        None => return Err(ParseError::MissingField(time_field)),
    };

    let tools = decode_tools(split.rest(), path)?;

    Ok(HistoricTemperatureData { time, tools })
}

/// Converts a JSON number of epoch seconds into a UTC timestamp.
///
/// Fractional seconds are truncated toward zero.
fn epoch_to_utc(raw: &Value, field: &str) -> Result<DateTime<Utc>, ParseError> {
    let Value::Number(number) = raw else {
        return Err(ParseError::TypeMismatch {
            field: display_path(field),
            expected: "number",
            actual: json_kind(raw),
        });
    };

    let out_of_range = || ParseError::InvalidValue {
        field: display_path(field),
        message: format!("epoch {number} is out of range"),
    };

    let secs = if let Some(secs) = number.as_i64() {
        secs
    } else if number.is_u64() {
        return Err(out_of_range());
    } else {
        number.as_f64().map(truncate_seconds).ok_or_else(out_of_range)?
    };

    DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(out_of_range)
}

// Saturates on overflow, which the timestamp range check then rejects.
#[allow(clippy::cast_possible_truncation)]
fn truncate_seconds(secs: f64) -> i64 {
    secs.trunc() as i64
}

/// Parses a historic temperature sample JSON payload.
pub(crate) fn parse_historic_entry(payload: &str) -> Result<HistoricTemperatureData, ParseError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_historic_entry(&value)
}
