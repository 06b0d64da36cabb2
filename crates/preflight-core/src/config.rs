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

//! The combined configuration for a preflight session.

use crate::cache::CacheSettings;
use crate::requirements::RequirementSet;
use serde::{Deserialize, Serialize};

/// Requirements and cache settings, typically loaded from `Preflight.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreflightConfig {
    /// The production standards the scene is validated against.
    pub requirements: RequirementSet,
    /// Where the geometry cache lives and what it exports.
    pub cache: CacheSettings,
}
