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

//! # Preflight SDK
//!
//! The stable entry point for a presenter. [`PreflightSession`] exposes one
//! method per user action and turns every result, including errors, into
//! text that can be shown as is.

#![warn(missing_docs)]

pub mod report;
pub mod session;

pub use report::{ActionReport, SnapshotSummary, ALL_CORRECT};
pub use session::PreflightSession;

/// Commonly used types for implementing a host adapter and driving a session.
pub mod prelude {
    pub use crate::{ActionReport, PreflightSession, SnapshotSummary};
    pub use preflight_core::cache::{
        CacheFormat, CacheOutcome, CacheSettings, CacheState, ConfirmationRequest, ExportJob,
    };
    pub use preflight_core::platform::{FsPathProbe, PathProbe, ResidentMemoryProbe};
    pub use preflight_core::scene::{
        CacheExporter, CameraInfo, ConfirmationPrompt, HostError, HostResult, SceneHost,
        TextureReference,
    };
    pub use preflight_core::{
        CacheError, FrameRange, IntrospectionError, PreflightConfig, PreflightError,
        RequirementSet, Resolution, SceneSnapshot, Violation, ViolationKind,
    };
    pub use preflight_infra::SysinfoMemoryProbe;
}
