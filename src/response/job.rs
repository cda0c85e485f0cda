// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Job response parsing.

use serde::Deserialize;

use crate::types::null_as_default;

/// Response from `GET /api/job`.
///
/// Most fields are `null` on the wire while no job is loaded, which is why
/// the numeric ones are optional.
///
/// # Examples
///
/// ```
/// use octor_lib::response::JobResponse;
///
/// let json = r#"{
///     "job": {"file": {"name": "whistle_v2.gcode", "origin": "local"}, "estimatedPrintTime": 8811},
///     "progress": {"completion": 0.22, "filepos": 337942, "printTime": 276, "printTimeLeft": 912},
///     "state": "Printing"
/// }"#;
/// let response: JobResponse = serde_json::from_str(json).unwrap();
///
/// assert_eq!(response.job.file.name, "whistle_v2.gcode");
/// assert_eq!(response.progress.print_time_left, Some(912));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobResponse {
    /// The target of the current print job.
    #[serde(default)]
    pub job: JobInformation,

    /// How far the current print job has come.
    #[serde(default)]
    pub progress: ProgressInformation,
}

/// Information regarding the target of the current job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInformation {
    /// The file that is the target of the current print job.
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: FileInformation,

    /// Estimated print time for the file, in seconds.
    #[serde(default)]
    pub estimated_print_time: Option<f64>,

    /// Print time of the last print of the file, in seconds.
    #[serde(default)]
    pub last_print_time: Option<f64>,

    /// Estimated filament usage of the job.
    #[serde(default)]
    pub filament: Option<Filament>,

    /// Current position in the file, in bytes from the beginning.
    #[serde(default, rename = "filepos")]
    pub file_position: Option<u64>,
}

/// Estimated filament usage.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Filament {
    /// Length of filament used, in mm.
    #[serde(default)]
    pub length: Option<f64>,

    /// Volume of filament used, in cm³.
    #[serde(default)]
    pub volume: Option<f64>,
}

/// Information regarding a file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInformation {
    /// Name of the file without path, e.g. `file.gco`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Path of the file within its location, e.g. `folder/subfolder/file.gco`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,

    /// Type of file: `model`, `machinecode` or `folder`.
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub file_type: String,

    /// Path to the type of file in the extension tree, e.g. `["machinecode", "gcode"]`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_path: Vec<String>,
}

/// Progress of the current print job.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressInformation {
    /// Completion of the current print job, in percent.
    #[serde(default)]
    pub completion: Option<f64>,

    /// Current position in the file being printed, in bytes.
    #[serde(default, rename = "filepos")]
    pub file_position: Option<u64>,

    /// Time already spent printing, in seconds.
    #[serde(default)]
    pub print_time: Option<u64>,

    /// Estimated time left to print, in seconds.
    #[serde(default)]
    pub print_time_left: Option<u64>,
}
