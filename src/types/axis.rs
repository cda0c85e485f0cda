// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Print head axis identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A movement axis of the print head.
///
/// `OctoPrint` names axes with lowercase single letters on the wire.
///
/// # Examples
///
/// ```
/// use octor_lib::types::Axis;
///
/// assert_eq!(Axis::Z.as_str(), "z");
/// assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
/// assert!("e".parse::<Axis>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Returns the wire representation of the axis.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(ValueError::InvalidAxis(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_from_str_any_case() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
    }

    #[test]
    fn axis_from_str_invalid() {
        assert_eq!(
            "xy".parse::<Axis>(),
            Err(ValueError::InvalidAxis("xy".to_string()))
        );
    }

    #[test]
    fn axis_display_matches_wire() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(serde_json::to_string(&Axis::Y).unwrap(), r#""y""#);
        assert_eq!(serde_json::from_str::<Axis>(r#""z""#).unwrap(), Axis::Z);
    }
}
