// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for `OctoPrint` JSON responses.
//!
//! This module provides structures for deserializing the JSON bodies of the
//! `OctoPrint` REST API. Fetching the bodies is left to the caller; hand the raw
//! text to [`ApiResponse`] or straight to `serde_json`.

mod connection;
mod job;
mod printer;
mod version;

pub use connection::{ConnectionOptions, ConnectionResponse, CurrentConnection, Profile};
pub use job::{FileInformation, Filament, JobInformation, JobResponse, ProgressInformation};
pub use printer::{FullStateResponse, PrinterFlags, PrinterState, SdState};
pub use version::VersionResponse;

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::ParseError;

/// Raw body of an `OctoPrint` API response.
///
/// # Examples
///
/// ```
/// use octor_lib::response::{ApiResponse, VersionResponse};
///
/// let response = ApiResponse::new(r#"{"api":"0.1","server":"1.5.2"}"#);
/// let version: VersionResponse = response.parse().unwrap();
/// assert_eq!(version.api, "0.1");
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse {
    body: String,
}

impl ApiResponse {
    /// Creates a response from the raw body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw JSON body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as a specific response type.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the body is not valid JSON, and
    /// [`ParseError::Decode`] if it is valid JSON that does not match the
    /// target type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(|e| {
            tracing::debug!(
                target_type = std::any::type_name::<T>(),
                error = %e,
                "Failed to parse API response"
            );
            match e.classify() {
                Category::Data => ParseError::Decode(e),
                Category::Io | Category::Syntax | Category::Eof => ParseError::Json(e),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_typed_body() {
        let response = ApiResponse::new(r#"{"current":{"state":"Paused"}}"#);
        let connection: ConnectionResponse = response.parse().unwrap();

        assert!(connection.current.state.is_operational());
        assert!(connection.current.state.is_printing());
    }

    #[test]
    fn parse_invalid_body() {
        let response = ApiResponse::new("<html>502 Bad Gateway</html>");
        let result = response.parse::<FullStateResponse>();

        assert!(matches!(result, Err(ParseError::Json(_))));
        assert_eq!(response.body(), "<html>502 Bad Gateway</html>");
    }

    #[test]
    fn nested_temperature_error_is_a_decode_error() {
        let response = ApiResponse::new(r#"{"temperature":{"bed":"60"}}"#);
        let err = response.parse::<FullStateResponse>().unwrap_err();

        assert!(matches!(err, ParseError::Decode(_)));
        assert!(err.to_string().contains("bed"));
    }

    #[test]
    fn missing_history_time_is_not_a_json_error() {
        let response = ApiResponse::new(r#"{"temperature":{"history":[{"tool0":{"actual":1}}]}}"#);
        let err = response.parse::<FullStateResponse>().unwrap_err();

        assert!(matches!(err, ParseError::Decode(_)));
        assert!(err.to_string().contains("history[0].time"));
    }

    #[test]
    fn truncated_body_is_a_json_error() {
        let response = ApiResponse::new(r#"{"temperature":{"bed":"#);
        let result = response.parse::<FullStateResponse>();

        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}
