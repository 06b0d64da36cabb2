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

//! Captures a [`SceneSnapshot`] from the host scene.

use preflight_core::platform::ResidentMemoryProbe;
use preflight_core::scene::SceneHost;
use preflight_core::{IntrospectionError, SceneSnapshot, Stopwatch};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Reads the scene configuration, renders once, and measures the render.
///
/// Steps run in a fixed order: playback range, resolution, and renderable
/// cameras are read first; then a memory baseline is taken, the render runs,
/// and memory and wall-clock deltas are recorded. Any failure aborts the pass
/// and no snapshot is returned.
///
/// # Errors
/// - [`IntrospectionError::SceneQuery`] if a scene attribute cannot be read.
/// - [`IntrospectionError::NoRenderableCamera`] if no camera is renderable.
///   The render is not attempted in that case.
/// - [`IntrospectionError::MemoryUnavailable`] if the probe cannot read memory.
/// - [`IntrospectionError::RenderFailed`] if the render call fails.
pub fn introspect<H, P>(host: &mut H, probe: &mut P) -> Result<SceneSnapshot, IntrospectionError>
where
    H: SceneHost + ?Sized,
    P: ResidentMemoryProbe + ?Sized,
{
    let frame_range = host
        .playback_range()
        .map_err(|source| IntrospectionError::SceneQuery {
            what: "playback range",
            source,
        })?;
    let resolution = host
        .resolution()
        .map_err(|source| IntrospectionError::SceneQuery {
            what: "resolution",
            source,
        })?;
    let renderable_cameras: Vec<String> = host
        .cameras()
        .map_err(|source| IntrospectionError::SceneQuery {
            what: "cameras",
            source,
        })?
        .into_iter()
        .filter(|camera| camera.renderable)
        .map(|camera| camera.name)
        .collect();

    log::debug!(
        "Introspect: range {frame_range}, resolution {resolution}, renderable cameras {renderable_cameras:?}"
    );

    if renderable_cameras.is_empty() {
        return Err(IntrospectionError::NoRenderableCamera);
    }

    let baseline = probe
        .resident_bytes()
        .ok_or(IntrospectionError::MemoryUnavailable)?;
    let stopwatch = Stopwatch::start();

    host.render().map_err(IntrospectionError::RenderFailed)?;

    let render_duration_s = stopwatch.elapsed_secs_f64();
    let after = probe
        .resident_bytes()
        .ok_or(IntrospectionError::MemoryUnavailable)?;
    let memory_delta_mb = (after as f64 - baseline as f64) / BYTES_PER_MB;

    log::info!(
        "Render finished in {render_duration_s:.4}s, resident memory delta {memory_delta_mb:.4} MB"
    );

    Ok(SceneSnapshot::new(
        frame_range,
        resolution,
        renderable_cameras,
        memory_delta_mb,
        render_duration_s,
    ))
}
