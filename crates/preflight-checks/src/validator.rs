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

//! Compares a [`SceneSnapshot`] with a [`RequirementSet`].

use preflight_core::{RequirementSet, SceneSnapshot, Violation, ViolationKind};

/// Runs every requirement rule against `snapshot` and returns the failures.
///
/// The rules are evaluated in a fixed order (frame range, resolution, camera,
/// memory, time) and none short-circuits another, so the output order is
/// stable. An empty list means every setting is correct.
///
/// The memory and time bounds are exclusive: a measurement equal to the
/// maximum fails.
///
/// The camera rule passes only when exactly one camera is renderable and it
/// is the required one. With several renderable cameras it always fails.
pub fn validate(snapshot: &SceneSnapshot, requirements: &RequirementSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    if snapshot.frame_range() != requirements.frame_range() {
        violations.push(Violation::new(
            ViolationKind::FrameRangeMismatch,
            format!(
                "Not the right start and/or end frame. It should be from {} to {}",
                requirements.start_frame, requirements.end_frame
            ),
        ));
    }

    if snapshot.resolution() != requirements.resolution() {
        violations.push(Violation::new(
            ViolationKind::ResolutionMismatch,
            format!(
                "Not the right resolution. It should be {}",
                requirements.resolution()
            ),
        ));
    }

    if !is_required_camera_only(snapshot.renderable_cameras(), &requirements.camera) {
        violations.push(Violation::new(
            ViolationKind::CameraMismatch,
            format!("Not the right camera. It should be {}", requirements.camera),
        ));
    }

    if !below(snapshot.memory_delta_mb(), requirements.max_memory_mb) {
        violations.push(Violation::new(
            ViolationKind::MemoryExceeded,
            format!(
                "Memory usage should not be over {} MB",
                requirements.max_memory_mb
            ),
        ));
    }

    if !below(snapshot.render_duration_s(), requirements.max_time_s) {
        violations.push(Violation::new(
            ViolationKind::TimeExceeded,
            format!("Render time should not be over {} s", requirements.max_time_s),
        ));
    }

    log::debug!("Validation produced {} violation(s)", violations.len());
    violations
}

/// Strict upper bound. NaN is never below anything.
fn below(measured: f64, max: f64) -> bool {
    measured < max
}

fn is_required_camera_only(renderable: &[String], required: &str) -> bool {
    matches!(renderable, [only] if only == required)
}
