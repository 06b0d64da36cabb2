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

//! Defines the error types for introspection and the cache workflow.
//!
//! Missing textures, a declined cache prompt, or a missing export root are
//! reported outcomes rather than errors. The types here cover the cases where
//! an action could not produce a result at all.

use crate::scene::HostError;
use crate::snapshot::FrameRange;
use std::path::PathBuf;
use thiserror::Error;

/// Introspection could not produce a complete snapshot.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    /// A scene query failed before the render was attempted.
    #[error("Failed to query {what} from the scene: {source}")]
    SceneQuery {
        /// Which attribute was being read.
        what: &'static str,
        /// The host's error.
        #[source]
        source: HostError,
    },
    /// No camera in the scene is flagged renderable.
    #[error("No renderable camera in the scene")]
    NoRenderableCamera,
    /// The host render call failed.
    #[error("Render failed: {0}")]
    RenderFailed(#[source] HostError),
    /// The resident memory of the host process could not be read.
    #[error("Resident memory of the host process is unavailable")]
    MemoryUnavailable,
    /// Validation was requested before any successful check.
    #[error("No scene snapshot available; run a check first")]
    NoSnapshot,
}

/// The cache workflow failed while creating the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The current playback range cannot be exported.
    #[error("Cannot export inverted or non-finite frame range {0}")]
    InvalidFrameRange(FrameRange),
    /// Reading the playback range from the scene failed.
    #[error("Failed to query the playback range from the scene: {0}")]
    SceneQuery(#[source] HostError),
    /// The cache directory could not be created.
    #[error("Failed to create cache directory '{path}': {source}")]
    CreateDirectory {
        /// The directory being created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The export command reported a failure.
    #[error("Cache export to '{path}' failed: {source}")]
    ExportFailed {
        /// The output file the export was writing.
        path: PathBuf,
        /// The exporter's error.
        #[source]
        source: HostError,
    },
    /// The export command returned but no file exists at the output path.
    #[error("Cache export finished but '{0}' does not exist")]
    OutputMissing(PathBuf),
}

/// Any error a preflight action can return.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// See [`IntrospectionError`].
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
    /// See [`CacheError`].
    #[error(transparent)]
    Cache(#[from] CacheError),
}
