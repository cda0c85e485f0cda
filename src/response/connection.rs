// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection response parsing.

use serde::Deserialize;

use crate::types::{ConnectionState, null_as_default};

/// Response from `GET /api/connection`.
///
/// # Examples
///
/// ```
/// use octor_lib::response::ConnectionResponse;
///
/// let json = r#"{
///     "current": {"state": "Printing from SD", "port": "/dev/ttyACM0", "baudrate": 250000, "printerProfile": "_default"},
///     "options": {"ports": ["/dev/ttyACM0"], "baudrates": [250000, 115200], "autoconnect": true}
/// }"#;
/// let response: ConnectionResponse = serde_json::from_str(json).unwrap();
///
/// assert!(response.current.state.is_printing());
/// assert_eq!(response.options.baudrates, vec![250000, 115200]);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionResponse {
    /// The current connection.
    #[serde(default)]
    pub current: CurrentConnection,

    /// The connection options offered by the server.
    #[serde(default)]
    pub options: ConnectionOptions,
}

/// Settings of the current connection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConnection {
    /// Current state of the connection.
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: ConnectionState,

    /// Port of the connection, empty while disconnected.
    #[serde(default, deserialize_with = "null_as_default")]
    pub port: String,

    /// Speed of the connection, `0` while disconnected.
    #[serde(default, deserialize_with = "null_as_default")]
    pub baudrate: u32,

    /// Identifier of the printer profile in use.
    #[serde(default, deserialize_with = "null_as_default")]
    pub printer_profile: String,
}

/// Connection options offered by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOptions {
    /// Available serial ports.
    #[serde(default)]
    pub ports: Vec<String>,

    /// Available speeds.
    #[serde(default)]
    pub baudrates: Vec<u32>,

    /// Available printer profiles.
    #[serde(default)]
    pub printer_profiles: Vec<Profile>,

    /// Default port.
    #[serde(default, deserialize_with = "null_as_default")]
    pub port_preference: String,

    /// Default speed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub baudrate_preference: u32,

    /// Default printer profile.
    #[serde(default, deserialize_with = "null_as_default")]
    pub printer_profile_preference: String,

    /// Whether the server connects to the printer on startup.
    #[serde(default)]
    pub autoconnect: bool,
}

/// A printer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Identifier of the profile.
    pub id: String,

    /// Display name of the profile.
    #[serde(default)]
    pub name: String,
}
