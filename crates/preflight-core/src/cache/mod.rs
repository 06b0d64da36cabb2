// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data types for the geometry cache workflow.

use crate::snapshot::FrameRange;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The container layout the exporter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheFormat {
    /// The ordered, baked-geometry container layout.
    #[default]
    Ogawa,
    /// The legacy hierarchical layout.
    Hdf5,
}

impl CacheFormat {
    /// The token the export command expects for `-dataFormat`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheFormat::Ogawa => "ogawa",
            CacheFormat::Hdf5 => "hdf5",
        }
    }
}

impl fmt::Display for CacheFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the geometry cache is stored and which scene node it exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSettings {
    /// Directory holding the cache file.
    pub directory: PathBuf,
    /// File name of the cache inside `directory`.
    pub file_name: String,
    /// Scene path of the node to export, e.g. `|spiderman`.
    pub export_root: String,
    /// Container layout to export.
    #[serde(default)]
    pub format: CacheFormat,
}

impl CacheSettings {
    /// The full path of the cache file.
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("cache"),
            file_name: "spiderman_cache.abc".to_string(),
            export_root: "|spiderman".to_string(),
            format: CacheFormat::Ogawa,
        }
    }
}

/// The parameters of one export command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    /// Frames to bake.
    pub frame_range: FrameRange,
    /// Container layout.
    pub format: CacheFormat,
    /// Scene path of the exported node.
    pub root: String,
    /// Output file.
    pub file: PathBuf,
}

impl ExportJob {
    /// Renders the job as the argument string of the host export command.
    pub fn to_job_args(&self) -> String {
        format!(
            "-frameRange {} {} -dataFormat {} -root {} -file \"{}\"",
            self.frame_range.start,
            self.frame_range.end,
            self.format,
            self.root,
            self.file.display()
        )
    }

    /// The output file as a path.
    pub fn output_path(&self) -> &Path {
        &self.file
    }
}

/// The result of the initial existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No file at the output path.
    Absent,
    /// The cache file exists.
    Present,
}

/// How a cache-ensure run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The cache file already existed. Nothing was exported.
    AlreadyPresent(PathBuf),
    /// The cache file was exported during this run.
    Created(PathBuf),
    /// The user declined to create the missing cache.
    DeclinedByUser(PathBuf),
    /// The export root does not exist in the scene. Nothing was written.
    ExportRootMissing(String),
}

impl CacheOutcome {
    /// Returns `true` if the cache exists after this run.
    pub fn is_present(&self) -> bool {
        matches!(self, CacheOutcome::AlreadyPresent(_) | CacheOutcome::Created(_))
    }
}

/// The fixed text of the "create missing cache?" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    /// Window title.
    pub title: &'static str,
    /// Main text.
    pub text: &'static str,
    /// Secondary text holding the question.
    pub informative_text: &'static str,
    /// The answer preselected when the dialog opens.
    pub default_answer: bool,
}

impl ConfirmationRequest {
    /// The prompt shown when the geometry cache is not on disk.
    pub fn missing_cache() -> Self {
        Self {
            title: "Alembic Cache Missing",
            text: "No Alembic cache found.",
            informative_text: "Do you want to cache?",
            default_answer: false,
        }
    }
}
