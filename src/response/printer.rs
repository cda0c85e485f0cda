// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Printer state response parsing.

use serde::Deserialize;

use crate::telemetry::TemperatureState;
use crate::types::ConnectionState;

/// Full printer state returned by `GET /api/printer`.
///
/// `OctoPrint` leaves out any section excluded through `?exclude=`, in which
/// case that field holds its default value.
///
/// # Examples
///
/// ```
/// use octor_lib::response::FullStateResponse;
///
/// let json = r#"{
///     "temperature": {"tool0": {"actual": 214.8, "target": 220.0, "offset": 0}},
///     "sd": {"ready": true},
///     "state": {"text": "Operational", "flags": {"operational": true, "ready": true}}
/// }"#;
/// let response: FullStateResponse = serde_json::from_str(json).unwrap();
///
/// assert_eq!(response.temperature.tool("tool0").unwrap().target, 220.0);
/// assert!(response.sd.ready);
/// assert!(response.state.connection_state().is_operational());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FullStateResponse {
    /// Temperature state of every tool.
    #[serde(default)]
    pub temperature: TemperatureState,

    /// SD card reader state.
    #[serde(default)]
    pub sd: SdState,

    /// General printer state.
    #[serde(default)]
    pub state: PrinterState,
}

/// State of the SD card reader.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SdState {
    /// Whether an SD card is initialized and ready.
    #[serde(default)]
    pub ready: bool,
}

/// General printer state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrinterState {
    /// Human readable state label (`"Operational"`, `"Printing"`...).
    #[serde(default)]
    pub text: String,

    /// State flags as computed by the server.
    #[serde(default)]
    pub flags: PrinterFlags,
}

impl PrinterState {
    /// Returns the state label as a classifiable connection state.
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        ConnectionState::new(self.text.as_str())
    }
}

/// Printer state flags.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct PrinterFlags {
    /// The printer is connected and accepts commands.
    #[serde(default)]
    pub operational: bool,

    /// A job is paused.
    #[serde(default)]
    pub paused: bool,

    /// A job is printing.
    #[serde(default)]
    pub printing: bool,

    /// The SD card is ready.
    #[serde(default)]
    pub sd_ready: bool,

    /// The printer is in an error state.
    #[serde(default)]
    pub error: bool,

    /// The printer is ready to receive a job.
    #[serde(default)]
    pub ready: bool,

    /// The connection is closed or in an error state.
    #[serde(default)]
    pub closed_or_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_state() {
        let json = r#"{
            "temperature": {
                "tool0": {"actual": 214.8821, "target": 220.0, "offset": 0},
                "bed": {"actual": 59.8, "target": 60.0, "offset": 5},
                "history": [
                    {"time": 1395651928, "tool0": {"actual": 214.8821, "target": 220.0}, "bed": {"actual": 59.8, "target": 60.0}}
                ]
            },
            "sd": {"ready": true},
            "state": {
                "text": "Operational",
                "flags": {
                    "operational": true,
                    "paused": false,
                    "printing": false,
                    "sdReady": true,
                    "error": false,
                    "ready": true,
                    "closedOrError": false
                }
            }
        }"#;
        let response: FullStateResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.temperature.current.len(), 2);
        assert_eq!(response.temperature.tool("bed").unwrap().offset, 5.0);
        assert_eq!(response.temperature.history.len(), 1);
        assert!(response.sd.ready);
        assert_eq!(response.state.text, "Operational");
        assert!(response.state.flags.operational);
        assert!(response.state.flags.sd_ready);
        assert!(response.state.flags.ready);
        assert!(!response.state.flags.closed_or_error);
    }

    #[test]
    fn excluded_sections_default() {
        let response: FullStateResponse =
            serde_json::from_str(r#"{"state": {"text": "Printing"}}"#).unwrap();

        assert!(response.temperature.current.is_empty());
        assert!(!response.sd.ready);
        assert!(!response.state.flags.printing);
        assert!(response.state.connection_state().is_printing());
    }

    #[test]
    fn malformed_temperature_fails_whole_response() {
        let result =
            serde_json::from_str::<FullStateResponse>(r#"{"temperature": {"history": [{"tool0": {"actual": 1}}]}}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("history[0].time"));
    }
}
