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

//! # Preflight Checks
//!
//! The decision logic of the render-readiness validator: scene introspection,
//! the requirement rules, texture path checks, and the geometry cache
//! workflow. Everything here talks to the host only through the traits in
//! `preflight-core`.

#![warn(missing_docs)]

pub mod assets;
pub mod cache;
pub mod introspect;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use assets::{check_assets, check_assets_with};
pub use cache::CacheEnsurer;
pub use introspect::introspect;
pub use validator::validate;
