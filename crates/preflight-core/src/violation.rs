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

//! Individual deviations reported by the checks.

use std::fmt;

/// The category of a reported deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The playback range differs from the required one.
    FrameRangeMismatch,
    /// The render resolution differs from the required one.
    ResolutionMismatch,
    /// The renderable cameras are not exactly the required camera.
    CameraMismatch,
    /// The render grew resident memory to or past the allowed maximum.
    MemoryExceeded,
    /// The render took as long as or longer than the allowed maximum.
    TimeExceeded,
    /// A referenced texture file is not on disk.
    MissingAsset,
    /// The required geometry cache is absent and was not created.
    MissingCache,
}

/// A single reported deviation from a required configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// What kind of check produced this violation.
    pub kind: ViolationKind,
    /// The user-facing explanation.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
