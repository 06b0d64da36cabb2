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

//! Provides abstractions over platform-specific functionalities.
//!
//! Process memory and filesystem stat calls go through these traits so the
//! checks can be exercised without a real host process or real files.

use std::path::Path;

/// Reads the resident memory of the host process.
pub trait ResidentMemoryProbe {
    /// Returns the current resident set size in bytes, or `None` if it cannot
    /// be read.
    fn resident_bytes(&mut self) -> Option<u64>;
}

/// Filesystem existence checks.
pub trait PathProbe {
    /// Returns `true` if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// A [`PathProbe`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathProbe;

impl PathProbe for FsPathProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
