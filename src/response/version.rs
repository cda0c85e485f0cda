// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Version response parsing.

use serde::Deserialize;

/// Response from `GET /api/version`.
///
/// # Examples
///
/// ```
/// use octor_lib::response::VersionResponse;
///
/// let json = r#"{"api": "0.1", "server": "1.5.2", "text": "OctoPrint 1.5.2"}"#;
/// let response: VersionResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.server, "1.5.2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VersionResponse {
    /// API version.
    #[serde(default)]
    pub api: String,

    /// Server version.
    #[serde(default)]
    pub server: String,
}
