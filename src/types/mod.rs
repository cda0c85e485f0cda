// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by `OctoPrint` responses.
//!
//! # Types
//!
//! - [`ConnectionState`] - Open-ended connection label with prefix classification
//! - [`ConnectionCapabilities`] - Overlapping capability flags derived from a label
//! - [`TemperatureData`] - Actual/target/offset reading of one tool
//! - [`Axis`] - Print head axis (x, y, z)

mod axis;
mod connection_state;
mod temperature;

pub use axis::Axis;
pub use connection_state::{ConnectionCapabilities, ConnectionState};
pub use temperature::TemperatureData;

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// `OctoPrint` reports unset strings and numbers as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
