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

//! The production standards a scene must meet before it is sent to render.

use crate::snapshot::{FrameRange, Resolution};
use serde::{Deserialize, Serialize};

/// The required production values a [`SceneSnapshot`](crate::SceneSnapshot)
/// is compared against.
///
/// When deserialized, every field must be present. There are no per-field
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementSet {
    /// Required first frame of the playback range.
    pub start_frame: f64,
    /// Required last frame of the playback range.
    pub end_frame: f64,
    /// Required render width in pixels.
    pub resolution_width: u32,
    /// Required render height in pixels.
    pub resolution_height: u32,
    /// The one camera that must be the only renderable camera.
    pub camera: String,
    /// Exclusive upper bound on resident memory growth during the render, in MiB.
    pub max_memory_mb: f64,
    /// Exclusive upper bound on render wall-clock time, in seconds.
    pub max_time_s: f64,
}

impl RequirementSet {
    /// The studio production standard: frames 1 to 50 at 1920 x 1080 through
    /// `perspShape`, under 0.5 MiB of memory growth and 0.1 s of render time.
    pub fn production() -> Self {
        Self {
            start_frame: 1.0,
            end_frame: 50.0,
            resolution_width: 1920,
            resolution_height: 1080,
            camera: "perspShape".to_string(),
            max_memory_mb: 0.5,
            max_time_s: 0.1,
        }
    }

    /// The required playback range.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange::new(self.start_frame, self.end_frame)
    }

    /// The required render resolution.
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.resolution_width, self.resolution_height)
    }
}

impl Default for RequirementSet {
    fn default() -> Self {
        Self::production()
    }
}
