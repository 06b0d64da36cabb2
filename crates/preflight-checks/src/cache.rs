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

//! The check-then-create workflow for the required geometry cache.

use preflight_core::cache::{
    CacheOutcome, CacheSettings, CacheState, ConfirmationRequest, ExportJob,
};
use preflight_core::platform::{FsPathProbe, PathProbe};
use preflight_core::scene::{CacheExporter, ConfirmationPrompt, SceneHost};
use preflight_core::CacheError;
use std::fs;
use std::path::{Path, PathBuf};

/// Makes sure the configured geometry cache file exists, asking the user
/// before creating it.
///
/// The initial existence check yields [`CacheState::Present`] or
/// [`CacheState::Absent`]. An absent cache waits on the user's decision for
/// the duration of the blocking prompt call. A present cache ends the run
/// immediately, so a second run after a successful export never exports
/// again.
#[derive(Debug, Clone)]
pub struct CacheEnsurer<P = FsPathProbe> {
    settings: CacheSettings,
    probe: P,
}

impl CacheEnsurer<FsPathProbe> {
    /// Creates an ensurer that checks the real filesystem.
    pub fn new(settings: CacheSettings) -> Self {
        Self::with_probe(settings, FsPathProbe)
    }
}

impl<P: PathProbe> CacheEnsurer<P> {
    /// Creates an ensurer with a custom existence probe.
    pub fn with_probe(settings: CacheSettings, probe: P) -> Self {
        Self { settings, probe }
    }

    /// The cache configuration.
    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    /// The full path of the cache file.
    pub fn output_path(&self) -> PathBuf {
        self.settings.output_path()
    }

    /// The result of the existence check: `Present` or `Absent`.
    pub fn state(&self) -> CacheState {
        if self.probe.exists(&self.output_path()) {
            CacheState::Present
        } else {
            CacheState::Absent
        }
    }

    /// Runs the workflow once.
    ///
    /// With the cache absent, `prompt` is asked once. On "yes" the export root
    /// is looked up in `host`; if it exists, one [`ExportJob`] covering the
    /// current playback range is handed to `exporter`.
    ///
    /// Before exporting, the parent directory of the output path is created
    /// on the real filesystem, whatever [`PathProbe`] the ensurer was built
    /// with. Directories created this way are removed again, if still empty,
    /// when the export fails.
    ///
    /// # Errors
    /// Returns a [`CacheError`] only when creation was attempted and failed.
    /// A declined prompt or a missing export root are [`CacheOutcome`]s.
    pub fn ensure<H, E, C>(
        &self,
        host: &H,
        exporter: &mut E,
        prompt: &mut C,
    ) -> Result<CacheOutcome, CacheError>
    where
        H: SceneHost + ?Sized,
        E: CacheExporter + ?Sized,
        C: ConfirmationPrompt + ?Sized,
    {
        let path = self.output_path();

        if self.state() == CacheState::Present {
            log::info!("Cache already present at '{}'", path.display());
            return Ok(CacheOutcome::AlreadyPresent(path));
        }

        log::debug!(
            "Cache absent at '{}', awaiting user decision",
            path.display()
        );
        if !prompt.confirm(&ConfirmationRequest::missing_cache()) {
            log::info!("User declined to create the cache at '{}'", path.display());
            return Ok(CacheOutcome::DeclinedByUser(path));
        }

        self.create(host, exporter, path)
    }

    fn create<H, E>(
        &self,
        host: &H,
        exporter: &mut E,
        path: PathBuf,
    ) -> Result<CacheOutcome, CacheError>
    where
        H: SceneHost + ?Sized,
        E: CacheExporter + ?Sized,
    {
        let root = &self.settings.export_root;
        if !host.object_exists(root) {
            log::warn!("Export root '{root}' does not exist in the scene");
            return Ok(CacheOutcome::ExportRootMissing(root.clone()));
        }

        let frame_range = host.playback_range().map_err(CacheError::SceneQuery)?;
        if !frame_range.is_ordered() {
            return Err(CacheError::InvalidFrameRange(frame_range));
        }

        let created_dirs = match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            Some(dir) => create_cache_dir(dir)?,
            None => Vec::new(),
        };

        let job = ExportJob {
            frame_range,
            format: self.settings.format,
            root: root.clone(),
            file: path.clone(),
        };
        log::info!("Exporting cache: {}", job.to_job_args());
        if let Err(source) = exporter.export(&job) {
            remove_empty_dirs(&created_dirs);
            return Err(CacheError::ExportFailed { path, source });
        }

        if !self.probe.exists(&path) {
            return Err(CacheError::OutputMissing(path));
        }

        log::info!("Cache created at '{}'", path.display());
        Ok(CacheOutcome::Created(path))
    }
}

/// Creates `dir` and any missing ancestors. Returns the directories that did
/// not exist before, deepest first.
fn create_cache_dir(dir: &Path) -> Result<Vec<PathBuf>, CacheError> {
    let missing: Vec<PathBuf> = dir
        .ancestors()
        .take_while(|ancestor| !ancestor.as_os_str().is_empty() && !ancestor.exists())
        .map(Path::to_path_buf)
        .collect();
    fs::create_dir_all(dir).map_err(|source| CacheError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(missing)
}

fn remove_empty_dirs(dirs: &[PathBuf]) {
    for dir in dirs {
        // remove_dir refuses non-empty directories, so partial exports stay.
        if let Err(e) = fs::remove_dir(dir) {
            log::warn!("Could not remove cache directory '{}': {e}", dir.display());
            break;
        }
    }
}
