// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for the printer temperature state.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::history_parser::{HistoricTemperatureData, decode_historic_entry_at};
use super::reserved_key::{ReservedSplit, expect_object, field_path, json_kind};
use crate::error::ParseError;
use crate::types::TemperatureData;

const HISTORY_KEY: &str = "history";

/// The printer's temperature state.
///
/// On the wire, every tool sits at the top level of the object next to an
/// optional `history` array:
///
/// ```json
/// {"tool0": {"actual": 200.1, "target": 200.0, "offset": 0.0},
///  "bed": {"actual": 60.2, "target": 60.0, "offset": 0.0},
///  "history": [{"time": 1610000000, "tool0": {"actual": 199.0, "target": 200.0}}]}
/// ```
///
/// Tool identifiers are server-defined, so they are kept as map keys.
///
/// # Examples
///
/// ```
/// use octor_lib::telemetry::TemperatureState;
///
/// let json = r#"{"tool0":{"actual":200.1,"target":200,"offset":0},"bed":{"actual":60,"target":60,"offset":0}}"#;
/// let state: TemperatureState = serde_json::from_str(json).unwrap();
///
/// assert_eq!(state.current.len(), 2);
/// assert_eq!(state.tool("bed").unwrap().target, 60.0);
/// assert!(state.history.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemperatureState {
    /// Current reading of every reported tool, keyed by tool identifier.
    pub current: BTreeMap<String, TemperatureData>,

    /// Historic samples, oldest first. Empty when the server sent none.
    pub history: Vec<HistoricTemperatureData>,
}

impl TemperatureState {
    /// Returns the current reading of a tool.
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<&TemperatureData> {
        self.current.get(name)
    }

    /// Returns the identifiers of all reported tools.
    #[must_use]
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.current.keys().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for TemperatureState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_temperature(&value).map_err(serde::de::Error::custom)
    }
}

/// Decodes a temperature state from an already parsed JSON value.
///
/// # Errors
///
/// Returns `ParseError` if the value is not an object, if a tool entry is not
/// a valid reading, or if `history` is neither an array nor `null`.
pub fn decode_temperature(value: &Value) -> Result<TemperatureState, ParseError> {
    let object = expect_object(value, "")?;
    let split = ReservedSplit::from_object(object, HISTORY_KEY);

    let current = decode_tools(split.rest(), "")?;

    let history = match split.reserved() {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                decode_historic_entry_at(entry, &format!("{HISTORY_KEY}[{index}]"))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(ParseError::TypeMismatch {
                field: HISTORY_KEY.to_string(),
                expected: "array",
                actual: json_kind(other),
            });
        }
    };

    tracing::trace!(
        tools = current.len(),
        history = history.len(),
        "Decoded temperature state"
    );

    Ok(TemperatureState { current, history })
}

/// Decodes every entry as a tool reading, naming failures by their path.
pub(crate) fn decode_tools(
    entries: &[(&str, &Value)],
    parent: &str,
) -> Result<BTreeMap<String, TemperatureData>, ParseError> {
    entries
        .iter()
        .map(|&(key, value)| {
            let field = field_path(parent, key);
            expect_object(value, &field)?;
            let reading = TemperatureData::deserialize(value)
                .map_err(|e| ParseError::InvalidValue {
                    field,
                    message: e.to_string(),
                })?;
            Ok((key.to_string(), reading))
        })
        .collect()
}

/// Parses a temperature state JSON payload.
pub(crate) fn parse_temperature(payload: &str) -> Result<TemperatureState, ParseError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_temperature(&value)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_current_and_history() {
        let json = r#"{
            "tool0": {"actual": 200.1, "target": 200, "offset": 0},
            "bed": {"actual": 60, "target": 60, "offset": 0},
            "history": [
                {"time": 1610000000, "tool0": {"actual": 199, "target": 200, "offset": 0}}
            ]
        }"#;
        let state = parse_temperature(json).unwrap();

        assert_eq!(state.current.len(), 2);
        assert_eq!(
            state.tool("tool0"),
            Some(&TemperatureData::new(200.1, 200.0, 0.0))
        );
        assert_eq!(state.tool("bed"), Some(&TemperatureData::new(60.0, 60.0, 0.0)));

        assert_eq!(state.history.len(), 1);
        let entry = &state.history[0];
        assert_eq!(entry.time, DateTime::<Utc>::from_timestamp(1_610_000_000, 0).unwrap());
        assert_eq!(entry.tools.len(), 1);
        assert_eq!(
            entry.tool("tool0"),
            Some(&TemperatureData::new(199.0, 200.0, 0.0))
        );
    }

    #[test]
    fn missing_history_is_empty() {
        let state = parse_temperature(r#"{"tool0":{"actual":20,"target":0}}"#).unwrap();
        assert_eq!(state.current.len(), 1);
        assert!(state.history.is_empty());
    }

    #[test]
    fn null_and_empty_history_are_empty() {
        let null = parse_temperature(r#"{"history":null}"#).unwrap();
        let empty = parse_temperature(r#"{"history":[]}"#).unwrap();
        assert!(null.history.is_empty());
        assert_eq!(null, empty);
    }

    #[test]
    fn history_order_is_preserved() {
        let value = json!({
            "history": [
                {"time": 30, "bed": {"actual": 3.0}},
                {"time": 10, "bed": {"actual": 1.0}},
                {"time": 20, "bed": {"actual": 2.0}},
            ]
        });
        let state = decode_temperature(&value).unwrap();

        let times: Vec<i64> = state.history.iter().map(|h| h.time.timestamp()).collect();
        assert_eq!(times, vec![30, 10, 20]);
        assert!(state.current.is_empty());
    }

    #[test]
    fn arbitrary_tool_names_are_kept() {
        let value = json!({
            "tool0": {"actual": 1.0},
            "tool1": {"actual": 2.0},
            "chamber": {"actual": 3.0},
            "W": {"actual": 4.0},
        });
        let state = decode_temperature(&value).unwrap();
        let names: Vec<&str> = state.tool_names().collect();
        assert_eq!(names, vec!["W", "chamber", "tool0", "tool1"]);
    }

    #[test]
    fn tool_not_an_object_names_key() {
        let err = parse_temperature(r#"{"tool0": 200.0}"#).unwrap_err();
        match err {
            ParseError::TypeMismatch {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "tool0");
                assert_eq!(expected, "object");
                assert_eq!(actual, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_tool_reading_names_key() {
        let err = parse_temperature(r#"{"bed": {"actual": "hot"}}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { ref field, .. } if field == "bed"));
    }

    #[test]
    fn heater_without_reading_decodes_as_zero() {
        let json = r#"{"bed": {"actual": null, "target": null}, "tool0": {"target": 60}}"#;
        let state = parse_temperature(json).unwrap();
        assert_eq!(state.tool("bed"), Some(&TemperatureData::default()));
        assert_eq!(state.tool("tool0"), Some(&TemperatureData::new(0.0, 60.0, 0.0)));
    }

    #[test]
    fn history_not_an_array() {
        let err = parse_temperature(r#"{"history": {"time": 1}}"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TypeMismatch { ref field, expected: "array", actual: "object" } if field == "history"
        ));
    }

    #[test]
    fn history_entry_errors_carry_index() {
        let json = r#"{"history": [
            {"time": 1, "tool0": {"actual": 1}},
            {"time": 2, "tool0": "broken"}
        ]}"#;
        let err = parse_temperature(json).unwrap_err();
        assert!(matches!(err, ParseError::TypeMismatch { ref field, .. } if field == "history[1].tool0"));
    }

    #[test]
    fn history_entry_without_time_is_an_error() {
        let err = parse_temperature(r#"{"history": [{"tool0": {"actual": 1}}]}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "history[0].time"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_temperature("{\"tool0\":"),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(
            parse_temperature("[]"),
            Err(ParseError::TypeMismatch { expected: "object", .. })
        ));
    }

    #[test]
    fn deserialize_impl_reports_decode_errors() {
        let err = serde_json::from_str::<TemperatureState>(r#"{"tool0": []}"#).unwrap_err();
        assert!(err.to_string().contains("tool0"));
    }
}
