// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature telemetry parsing for `OctoPrint` responses.
//!
//! Two `OctoPrint` payloads keep a set of dynamically-named tool keys next to a
//! single reserved key in the same object:
//!
//! - the temperature state, where `history` sits next to `tool0`, `bed`, ...
//! - each historic sample, where `time` sits next to the tool readings
//!
//! Both are decoded by splitting the reserved key off first (see
//! [`split_reserved_key`]) and then decoding the remaining entries one by one,
//! so errors name the exact key that failed (for example `history[3].tool0`).
//!
//! # Examples
//!
//! ```
//! use octor_lib::telemetry::parse_temperature;
//!
//! let payload = r#"{
//!     "tool0": {"actual": 200.1, "target": 200.0, "offset": 0.0},
//!     "bed": {"actual": 60.2, "target": 60.0, "offset": 0.0},
//!     "history": [{"time": 1610000000, "tool0": {"actual": 199.0, "target": 200.0}}]
//! }"#;
//!
//! let state = parse_temperature(payload).unwrap();
//! assert_eq!(state.current.len(), 2);
//! assert_eq!(state.history[0].time.timestamp(), 1610000000);
//! ```

mod history_parser;
mod reserved_key;
mod temperature_parser;

pub use history_parser::{HistoricTemperatureData, decode_historic_entry};
pub use reserved_key::{ReservedSplit, split_reserved_key};
pub use temperature_parser::{TemperatureState, decode_temperature};

use crate::error::ParseError;

/// Parses a temperature state payload.
///
/// # Errors
///
/// Returns `ParseError` if the payload is not valid JSON, is not an object,
/// or contains a malformed tool reading or historic sample.
pub fn parse_temperature(payload: &str) -> Result<TemperatureState, ParseError> {
    temperature_parser::parse_temperature(payload)
}

/// Parses a single historic temperature sample payload.
///
/// # Errors
///
/// Returns `ParseError` if the payload is not valid JSON, if `time` is missing
/// or not numeric, or if a tool reading is malformed.
///
/// # Examples
///
/// ```
/// use octor_lib::telemetry::parse_historic_entry;
/// use octor_lib::ParseError;
///
/// let err = parse_historic_entry(r#"{"tool0":{"actual":20}}"#).unwrap_err();
/// assert!(matches!(err, ParseError::MissingField(_)));
/// ```
pub fn parse_historic_entry(payload: &str) -> Result<HistoricTemperatureData, ParseError> {
    history_parser::parse_historic_entry(payload)
}
