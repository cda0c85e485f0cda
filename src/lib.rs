// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `OctoR` Lib - A Rust library to decode `OctoPrint` API responses.
//!
//! This library turns the JSON bodies returned by an `OctoPrint` server into
//! typed records. Transport and authentication are left to the caller: fetch
//! the body with any HTTP client and hand the text over.
//!
//! # Supported Responses
//!
//! - **Printer state**: temperatures with history, SD state, state flags
//! - **Job**: target file, progress, filament estimates
//! - **Connection**: current connection state and available options
//! - **Version**: API and server versions
//!
//! # Temperature Telemetry
//!
//! `OctoPrint` reports tool temperatures as dynamically-named keys next to a
//! `history` array, and each history sample keeps its epoch `time` next to the
//! tool readings. [`telemetry`] splits those reserved keys off and decodes the
//! rest into maps keyed by tool identifier.
//!
//! # Connection States
//!
//! Connection states are free-form labels. [`ConnectionState`] classifies them
//! by prefix into overlapping capabilities: a paused printer is both
//! operational and printing.
//!
//! # Quick Start
//!
//! ```
//! use octor_lib::response::{ApiResponse, FullStateResponse};
//!
//! fn main() -> octor_lib::Result<()> {
//!     // Body fetched from `GET /api/printer`
//!     let body = r#"{
//!         "temperature": {
//!             "tool0": {"actual": 200.1, "target": 200.0, "offset": 0.0},
//!             "bed": {"actual": 60.2, "target": 60.0, "offset": 0.0},
//!             "history": [{"time": 1610000000, "tool0": {"actual": 199.0, "target": 200.0}}]
//!         },
//!         "state": {"text": "Paused", "flags": {"operational": true, "paused": true}}
//!     }"#;
//!
//!     let state: FullStateResponse = ApiResponse::new(body).parse()?;
//!
//!     for (tool, reading) in &state.temperature.current {
//!         println!("{tool}: {:.1} / {:.1}", reading.actual, reading.target);
//!     }
//!
//!     let caps = state.state.connection_state().capabilities();
//!     assert!(caps.operational && caps.printing);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod response;
pub mod telemetry;
pub mod types;

pub use error::{Error, ParseError, Result, ValueError};
pub use response::{
    ApiResponse, ConnectionResponse, FullStateResponse, JobResponse, VersionResponse,
};
pub use telemetry::{
    HistoricTemperatureData, TemperatureState, parse_historic_entry, parse_temperature,
};
pub use types::{Axis, ConnectionCapabilities, ConnectionState, TemperatureData};
