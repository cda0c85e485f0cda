// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature reading for a single heated tool.

use serde::Deserialize;

use super::null_as_default;

/// Temperature stats for one tool (extruder, bed, chamber...).
///
/// # Examples
///
/// ```
/// use octor_lib::types::TemperatureData;
///
/// let json = r#"{"actual": 199.0, "target": null}"#;
/// let data: TemperatureData = serde_json::from_str(json).unwrap();
/// assert_eq!(data.actual, 199.0);
/// assert_eq!(data.target, 0.0);
/// assert_eq!(data.offset, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct TemperatureData {
    /// Actual current temperature, `0.0` while the sensor reports nothing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub actual: f64,

    /// Target temperature, `0.0` when no target is set.
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: f64,

    /// Configured temperature offset. Historic readings leave it out.
    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: f64,
}

impl TemperatureData {
    /// Creates a reading from its three components.
    #[must_use]
    pub const fn new(actual: f64, target: f64, offset: f64) -> Self {
        Self {
            actual,
            target,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_reading() {
        let data: TemperatureData =
            serde_json::from_str(r#"{"actual":200.1,"target":200,"offset":-2.5}"#).unwrap();
        assert_eq!(data, TemperatureData::new(200.1, 200.0, -2.5));
    }

    #[test]
    fn null_or_missing_actual_reads_as_zero() {
        let data: TemperatureData =
            serde_json::from_str(r#"{"actual":null,"target":null}"#).unwrap();
        assert_eq!(data, TemperatureData::default());

        let data: TemperatureData = serde_json::from_str(r#"{"target":60}"#).unwrap();
        assert_eq!(data, TemperatureData::new(0.0, 60.0, 0.0));
    }

    #[test]
    fn non_numeric_actual_is_an_error() {
        let result = serde_json::from_str::<TemperatureData>(r#"{"actual":"hot"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_target_is_an_error() {
        let result = serde_json::from_str::<TemperatureData>(r#"{"actual":20,"target":"hot"}"#);
        assert!(result.is_err());
    }
}
