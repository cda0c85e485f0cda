// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `OctoR` library.
//!
//! Decoding failures are reported through [`ParseError`], which carries the
//! offending key path so a caller can log and abandon a single response.
//! Value construction failures are reported through [`ValueError`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An unknown axis name was provided.
    #[error("invalid axis: {0}")]
    InvalidAxis(String),
}

/// Errors related to parsing `OctoPrint` responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but does not have the shape of the response.
    ///
    /// The message names the offending key path when a nested decoder failed.
    #[error("response shape error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A required key is missing from the payload.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A value has a different JSON kind than expected.
    #[error("type mismatch at {field}: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Path of the offending value (`<root>` for the payload itself).
        field: String,
        /// The JSON kind that was expected.
        expected: &'static str,
        /// The JSON kind that was found.
        actual: &'static str,
    },

    /// A value has the right kind but could not be decoded.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// Path of the offending value.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
