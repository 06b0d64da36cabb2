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

//! A single-user preflight session.

use crate::report::{ActionReport, SnapshotSummary};
use preflight_checks::{check_assets_with, introspect, validate, CacheEnsurer};
use preflight_core::cache::CacheOutcome;
use preflight_core::platform::{FsPathProbe, PathProbe, ResidentMemoryProbe};
use preflight_core::scene::{CacheExporter, ConfirmationPrompt, SceneHost};
use preflight_core::{
    IntrospectionError, PreflightConfig, PreflightError, RequirementSet, SceneSnapshot, Violation,
};
use std::path::Path;

/// Drives the four preflight actions against one requirement set and one
/// cache configuration.
///
/// The session keeps the most recent [`SceneSnapshot`]. Every
/// [`check`](Self::check) replaces it as a whole and a failed check clears it,
/// so [`validate`](Self::validate) only ever sees the result of the latest
/// successful pass.
pub struct PreflightSession<P = FsPathProbe> {
    requirements: RequirementSet,
    cache: CacheEnsurer<P>,
    paths: P,
    last_snapshot: Option<SceneSnapshot>,
}

impl PreflightSession<FsPathProbe> {
    /// Creates a session that checks the real filesystem.
    pub fn new(config: PreflightConfig) -> Self {
        Self::with_probe(config, FsPathProbe)
    }

    /// Loads the configuration at `path` (or the defaults if it is absent)
    /// and creates a session from it.
    pub fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = preflight_infra::load_config(path)?;
        Ok(Self::new(config))
    }
}

impl<P: PathProbe + Clone> PreflightSession<P> {
    /// Creates a session with a custom existence probe for textures and the
    /// cache file.
    pub fn with_probe(config: PreflightConfig, probe: P) -> Self {
        Self {
            requirements: config.requirements,
            cache: CacheEnsurer::with_probe(config.cache, probe.clone()),
            paths: probe,
            last_snapshot: None,
        }
    }
}

impl<P: PathProbe> PreflightSession<P> {
    /// The requirements the scene is validated against.
    pub fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }

    /// The cache workflow of this session.
    pub fn cache(&self) -> &CacheEnsurer<P> {
        &self.cache
    }

    /// The snapshot from the latest successful check, if any.
    pub fn last_snapshot(&self) -> Option<&SceneSnapshot> {
        self.last_snapshot.as_ref()
    }

    /// Introspects the scene and stores the new snapshot.
    ///
    /// # Errors
    /// Returns the introspection error and clears the stored snapshot.
    pub fn check<H, M>(
        &mut self,
        host: &mut H,
        memory: &mut M,
    ) -> Result<&SceneSnapshot, PreflightError>
    where
        H: SceneHost + ?Sized,
        M: ResidentMemoryProbe + ?Sized,
    {
        self.last_snapshot = None;
        let snapshot = introspect(host, memory)?;
        Ok(&*self.last_snapshot.insert(snapshot))
    }

    /// Validates the stored snapshot.
    ///
    /// # Errors
    /// [`IntrospectionError::NoSnapshot`] if no check has succeeded yet.
    pub fn validate(&self) -> Result<Vec<Violation>, PreflightError> {
        let snapshot = self
            .last_snapshot
            .as_ref()
            .ok_or(IntrospectionError::NoSnapshot)?;
        Ok(validate(snapshot, &self.requirements))
    }

    /// Checks every texture reference currently bound in `host`.
    ///
    /// # Errors
    /// [`IntrospectionError::SceneQuery`] if the references cannot be listed.
    pub fn check_textures<H>(&self, host: &H) -> Result<Vec<Violation>, PreflightError>
    where
        H: SceneHost + ?Sized,
    {
        let references = host
            .texture_references()
            .map_err(|source| IntrospectionError::SceneQuery {
                what: "texture references",
                source,
            })?;
        log::debug!("Checking {} texture reference(s)", references.len());
        Ok(check_assets_with(&self.paths, &references))
    }

    /// Runs the cache workflow.
    ///
    /// # Errors
    /// See [`CacheEnsurer::ensure`].
    pub fn ensure_cache<H, E, C>(
        &self,
        host: &H,
        exporter: &mut E,
        prompt: &mut C,
    ) -> Result<CacheOutcome, PreflightError>
    where
        H: SceneHost + ?Sized,
        E: CacheExporter + ?Sized,
        C: ConfirmationPrompt + ?Sized,
    {
        Ok(self.cache.ensure(host, exporter, prompt)?)
    }

    /// The "Check" action: introspects and returns the measurement labels,
    /// or the error as a one-line report.
    pub fn check_report<H, M>(
        &mut self,
        host: &mut H,
        memory: &mut M,
    ) -> Result<SnapshotSummary, ActionReport>
    where
        H: SceneHost + ?Sized,
        M: ResidentMemoryProbe + ?Sized,
    {
        self.check(host, memory)
            .map(SnapshotSummary::new)
            .map_err(|e| {
                log::error!("Check failed: {e}");
                ActionReport::error(&e)
            })
    }

    /// The "Validate" action.
    pub fn validation_report(&self) -> ActionReport {
        match self.validate() {
            Ok(violations) => ActionReport::from_violations(&violations),
            Err(e) => {
                log::error!("Validation failed: {e}");
                ActionReport::error(&e)
            }
        }
    }

    /// The "Textures file path" action.
    pub fn texture_report<H>(&self, host: &H) -> ActionReport
    where
        H: SceneHost + ?Sized,
    {
        match self.check_textures(host) {
            Ok(violations) => ActionReport::from_violations(&violations),
            Err(e) => {
                log::error!("Texture check failed: {e}");
                ActionReport::error(&e)
            }
        }
    }

    /// The "Cache" action.
    pub fn cache_report<H, E, C>(&self, host: &H, exporter: &mut E, prompt: &mut C) -> ActionReport
    where
        H: SceneHost + ?Sized,
        E: CacheExporter + ?Sized,
        C: ConfirmationPrompt + ?Sized,
    {
        match self.ensure_cache(host, exporter, prompt) {
            Ok(outcome) => ActionReport::from_cache_outcome(&outcome),
            Err(e) => {
                log::error!("Cache check failed: {e}");
                ActionReport::error(&e)
            }
        }
    }
}
