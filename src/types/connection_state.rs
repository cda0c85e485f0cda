// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection state labels and their capability classification.
//!
//! `OctoPrint` reports the state of its serial link as a free-form label taken
//! from the printer communication layer (`"Operational"`, `"Printing from SD"`,
//! `"Offline after error"`, `"Error: ..."`). The vocabulary is open, but every
//! label starts with one of a small set of family prefixes. Classification
//! matches those prefixes, case-sensitively, and never rewrites the label.
//!
//! The families overlap: `"Paused"` is both operational and printing. Treat
//! the result as a set of capabilities, never as a single state.

use std::fmt;

use serde::{Deserialize, Serialize};

const OPERATIONAL_PREFIXES: &[&str] = &["Operational", "Transfering", "Paused"];
const PRINTING_PREFIXES: &[&str] = &["Printing", "Sending", "Paused"];
const OFFLINE_PREFIXES: &[&str] = &["Offline", "Closed"];
const ERROR_PREFIXES: &[&str] = &["Error", "Unknown"];
const CONNECTING_PREFIXES: &[&str] = &["Opening", "Detecting", "Connecting"];

fn has_any_prefix(label: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| label.starts_with(prefix))
}

/// A connection state label as reported by `OctoPrint`.
///
/// # Examples
///
/// ```
/// use octor_lib::types::ConnectionState;
///
/// let state = ConnectionState::new("Paused");
/// assert!(state.is_operational());
/// assert!(state.is_printing());
/// assert!(!state.is_offline());
///
/// let unknown = ConnectionState::new("Something else entirely");
/// assert!(unknown.capabilities().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionState(String);

impl ConnectionState {
    /// Label reported once the printer is connected and idle.
    pub const OPERATIONAL: &'static str = "Operational";

    /// Creates a connection state from a raw label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the printer accepts commands.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        has_any_prefix(&self.0, OPERATIONAL_PREFIXES)
    }

    /// Returns true if a job is running, paused jobs included.
    #[must_use]
    pub fn is_printing(&self) -> bool {
        has_any_prefix(&self.0, PRINTING_PREFIXES)
    }

    /// Returns true if the serial link is closed.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        has_any_prefix(&self.0, OFFLINE_PREFIXES)
    }

    /// Returns true if the link is in an error or unknown state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        has_any_prefix(&self.0, ERROR_PREFIXES)
    }

    /// Returns true while the link is being established.
    #[must_use]
    pub fn is_connecting(&self) -> bool {
        has_any_prefix(&self.0, CONNECTING_PREFIXES)
    }

    /// Classifies the label into its full capability set.
    #[must_use]
    pub fn capabilities(&self) -> ConnectionCapabilities {
        ConnectionCapabilities {
            operational: self.is_operational(),
            printing: self.is_printing(),
            offline: self.is_offline(),
            error: self.is_error(),
            connecting: self.is_connecting(),
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectionState {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for ConnectionState {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// The capability flags derived from a [`ConnectionState`] label.
///
/// Each flag is computed independently, so several may be set at once.
/// A label outside every known family yields all flags cleared.
///
/// # Examples
///
/// ```
/// use octor_lib::types::{ConnectionCapabilities, ConnectionState};
///
/// let caps = ConnectionState::new("Offline after error").capabilities();
/// assert_eq!(
///     caps,
///     ConnectionCapabilities { offline: true, ..ConnectionCapabilities::default() }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConnectionCapabilities {
    /// The printer accepts commands.
    pub operational: bool,

    /// A job is running or paused.
    pub printing: bool,

    /// The serial link is closed.
    pub offline: bool,

    /// The link reported an error or an unknown state.
    pub error: bool,

    /// The link is being established.
    pub connecting: bool,
}

impl ConnectionCapabilities {
    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.operational || self.printing || self.offline || self.error || self.connecting)
    }
}
