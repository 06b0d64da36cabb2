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

//! Abstractions over the host scene-authoring environment.
//!
//! The checks never talk to the host directly. A host adapter implements
//! [`SceneHost`] and [`CacheExporter`], and the presenter supplies a
//! [`ConfirmationPrompt`].

use crate::cache::{ConfirmationRequest, ExportJob};
use crate::snapshot::{FrameRange, Resolution};
use std::error::Error;

/// The error type returned by host collaborators.
pub type HostError = Box<dyn Error + Send + Sync>;

/// Result alias for host collaborator calls.
pub type HostResult<T> = Result<T, HostError>;

/// A camera as enumerated by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInfo {
    /// The host identifier of the camera.
    pub name: String,
    /// Whether a render pass uses this camera as a viewpoint.
    pub renderable: bool,
}

impl CameraInfo {
    /// Creates a new camera description.
    pub fn new(name: impl Into<String>, renderable: bool) -> Self {
        Self {
            name: name.into(),
            renderable,
        }
    }
}

/// An external texture file bound in the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureReference {
    /// The file node holding the reference, if the host reports one.
    pub node: Option<String>,
    /// The path as stored in the scene. Empty if unresolved.
    pub path: String,
}

impl TextureReference {
    /// A reference with no owning node, just a path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            node: None,
            path: path.into(),
        }
    }

    /// A reference owned by a named file node.
    pub fn with_node(node: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            node: Some(node.into()),
            path: path.into(),
        }
    }
}

/// Read access to the current scene, plus a blocking render.
pub trait SceneHost {
    /// Returns the active playback range.
    fn playback_range(&self) -> HostResult<FrameRange>;

    /// Returns the render resolution.
    fn resolution(&self) -> HostResult<Resolution>;

    /// Enumerates every camera in scene order.
    fn cameras(&self) -> HostResult<Vec<CameraInfo>>;

    /// Renders the current frame range and blocks until it finishes.
    fn render(&mut self) -> HostResult<()>;

    /// Returns `true` if a scene object exists at `path`.
    fn object_exists(&self, path: &str) -> bool;

    /// Enumerates every texture-file reference currently bound in the scene.
    fn texture_references(&self) -> HostResult<Vec<TextureReference>>;
}

/// Runs the host's geometry-cache export command.
pub trait CacheExporter {
    /// Exports `job` synchronously. Running the same job twice must write the
    /// same file.
    fn export(&mut self, job: &ExportJob) -> HostResult<()>;
}

/// A blocking yes/no question put to the user.
pub trait ConfirmationPrompt {
    /// Shows `request` and returns `true` only on an explicit "yes".
    /// Dismissing the dialog is a "no".
    fn confirm(&mut self, request: &ConfirmationRequest) -> bool;
}
