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

//! # Preflight Core
//!
//! Foundational crate containing the scene snapshot model, the requirement
//! set, and the collaborator traits that connect the render-readiness checks
//! to a host scene-authoring environment.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod platform;
pub mod requirements;
pub mod scene;
pub mod snapshot;
pub mod utils;
pub mod violation;

pub use config::PreflightConfig;
pub use error::{CacheError, IntrospectionError, PreflightError};
pub use requirements::RequirementSet;
pub use snapshot::{FrameRange, Resolution, SceneSnapshot};
pub use utils::timer::Stopwatch;
pub use violation::{Violation, ViolationKind};
