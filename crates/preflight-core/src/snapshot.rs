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

//! The measured state of a scene, captured by a single introspection pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive playback range, in frames.
///
/// Frames are fractional in most scene-authoring hosts, so both ends are `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRange {
    /// The first frame of the range.
    pub start: f64,
    /// The last frame of the range.
    pub end: f64,
}

impl FrameRange {
    /// Creates a new frame range.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if both ends are finite and `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start <= self.end
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// A render resolution, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// An immutable record of the scene state measured by one introspection pass.
///
/// All fields are supplied at construction and there are no setters, so a
/// snapshot is either complete or does not exist. A new pass replaces the
/// whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    frame_range: FrameRange,
    resolution: Resolution,
    renderable_cameras: Vec<String>,
    memory_delta_mb: f64,
    render_duration_s: f64,
}

impl SceneSnapshot {
    /// Builds a snapshot from every measured value at once.
    pub fn new(
        frame_range: FrameRange,
        resolution: Resolution,
        renderable_cameras: Vec<String>,
        memory_delta_mb: f64,
        render_duration_s: f64,
    ) -> Self {
        Self {
            frame_range,
            resolution,
            renderable_cameras,
            memory_delta_mb,
            render_duration_s,
        }
    }

    /// The active playback range.
    pub fn frame_range(&self) -> FrameRange {
        self.frame_range
    }

    /// The render resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Cameras flagged renderable, in scene enumeration order.
    pub fn renderable_cameras(&self) -> &[String] {
        &self.renderable_cameras
    }

    /// Resident memory growth across the render call, in MiB. Negative if the
    /// process shrank.
    pub fn memory_delta_mb(&self) -> f64 {
        self.memory_delta_mb
    }

    /// Wall-clock duration of the render call, in seconds.
    pub fn render_duration_s(&self) -> f64 {
        self.render_duration_s
    }
}
