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

//! Scripted collaborators shared by the unit tests.

use preflight_core::cache::{ConfirmationRequest, ExportJob};
use preflight_core::platform::ResidentMemoryProbe;
use preflight_core::scene::{
    CacheExporter, CameraInfo, ConfirmationPrompt, HostResult, SceneHost, TextureReference,
};
use preflight_core::{FrameRange, Resolution};
use std::collections::VecDeque;

/// A scene query the fake host can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostQuery {
    PlaybackRange,
    Resolution,
    Cameras,
}

pub(crate) struct FakeHost {
    pub range: FrameRange,
    pub resolution: Resolution,
    pub cameras: Vec<CameraInfo>,
    pub objects: Vec<String>,
    pub textures: Vec<TextureReference>,
    pub fail_render: bool,
    pub failing_query: Option<HostQuery>,
    pub render_calls: usize,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            range: FrameRange::new(1.0, 50.0),
            resolution: Resolution::new(1920, 1080),
            cameras: vec![CameraInfo::new("perspShape", true)],
            objects: vec!["|spiderman".to_string()],
            textures: Vec::new(),
            fail_render: false,
            failing_query: None,
            render_calls: 0,
        }
    }
}

impl FakeHost {
    pub fn with_cameras(mut self, cameras: Vec<CameraInfo>) -> Self {
        self.cameras = cameras;
        self
    }

    pub fn failing(mut self, query: HostQuery) -> Self {
        self.failing_query = Some(query);
        self
    }

    fn query(&self, query: HostQuery) -> HostResult<()> {
        if self.failing_query == Some(query) {
            return Err(format!("{query:?} query rejected by host").into());
        }
        Ok(())
    }
}

impl SceneHost for FakeHost {
    fn playback_range(&self) -> HostResult<FrameRange> {
        self.query(HostQuery::PlaybackRange)?;
        Ok(self.range)
    }

    fn resolution(&self) -> HostResult<Resolution> {
        self.query(HostQuery::Resolution)?;
        Ok(self.resolution)
    }

    fn cameras(&self) -> HostResult<Vec<CameraInfo>> {
        self.query(HostQuery::Cameras)?;
        Ok(self.cameras.clone())
    }

    fn render(&mut self) -> HostResult<()> {
        self.render_calls += 1;
        if self.fail_render {
            return Err("renderer license unavailable".into());
        }
        Ok(())
    }

    fn object_exists(&self, path: &str) -> bool {
        self.objects.iter().any(|object| object == path)
    }

    fn texture_references(&self) -> HostResult<Vec<TextureReference>> {
        Ok(self.textures.clone())
    }
}

/// Returns the queued readings in order, then `None`.
pub(crate) struct SequenceProbe {
    readings: VecDeque<u64>,
}

impl SequenceProbe {
    pub fn new(readings: Vec<u64>) -> Self {
        Self {
            readings: readings.into(),
        }
    }
}

impl ResidentMemoryProbe for SequenceProbe {
    fn resident_bytes(&mut self) -> Option<u64> {
        self.readings.pop_front()
    }
}

/// Records each job and writes a placeholder file unless told otherwise.
#[derive(Default)]
pub(crate) struct CountingExporter {
    pub jobs: Vec<ExportJob>,
    pub fail: bool,
    pub skip_write: bool,
}

impl CacheExporter for CountingExporter {
    fn export(&mut self, job: &ExportJob) -> HostResult<()> {
        self.jobs.push(job.clone());
        if self.fail {
            return Err("permission denied".into());
        }
        if !self.skip_write {
            std::fs::write(job.output_path(), job.to_job_args())?;
        }
        Ok(())
    }
}

pub(crate) struct ScriptedPrompt {
    pub answer: bool,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: 0 }
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&mut self, _request: &ConfirmationRequest) -> bool {
        self.asked += 1;
        self.answer
    }
}
