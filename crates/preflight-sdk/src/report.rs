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

//! Text rendering of action results for the presentation layer.

use preflight_core::cache::CacheOutcome;
use preflight_core::{SceneSnapshot, Violation, ViolationKind};
use std::fmt;

/// The text shown in a result panel when a check found nothing to report.
pub const ALL_CORRECT: &str = "All settings are correct!";

/// The contents of one result panel.
///
/// Renders as its lines joined by newlines, or [`ALL_CORRECT`] if it has no
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionReport {
    lines: Vec<String>,
}

impl ActionReport {
    /// A report with one line per violation, in order.
    pub fn from_violations(violations: &[Violation]) -> Self {
        Self {
            lines: violations.iter().map(|v| v.message.clone()).collect(),
        }
    }

    /// A report holding a single line.
    pub fn message(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// A report for an action that failed with `error`.
    pub fn error(error: &dyn std::error::Error) -> Self {
        Self::message(error.to_string())
    }

    /// The report for a finished cache workflow.
    pub fn from_cache_outcome(outcome: &CacheOutcome) -> Self {
        match outcome {
            CacheOutcome::AlreadyPresent(path) => {
                Self::message(format!("Cache is already at {}", path.display()))
            }
            CacheOutcome::Created(path) => {
                Self::message(format!("Cache is created at {}", path.display()))
            }
            CacheOutcome::DeclinedByUser(_) | CacheOutcome::ExportRootMissing(_) => {
                let violations: Vec<Violation> = cache_violation(outcome).into_iter().collect();
                Self::from_violations(&violations)
            }
        }
    }

    /// The individual lines. Empty means everything passed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if there is nothing to report.
    pub fn is_clean(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            f.write_str(ALL_CORRECT)
        } else {
            f.write_str(&self.lines.join("\n"))
        }
    }
}

/// The [`ViolationKind::MissingCache`] violation for an outcome that left the
/// cache absent, if any.
pub fn cache_violation(outcome: &CacheOutcome) -> Option<Violation> {
    match outcome {
        CacheOutcome::DeclinedByUser(_) => Some(Violation::new(
            ViolationKind::MissingCache,
            "Please add an Alembic cache.",
        )),
        CacheOutcome::ExportRootMissing(root) => Some(Violation::new(
            ViolationKind::MissingCache,
            format!("Object {root} does not exist in the scene."),
        )),
        CacheOutcome::AlreadyPresent(_) | CacheOutcome::Created(_) => None,
    }
}

/// The five measurement labels shown after a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    /// `Frame range: <start> - <end>`
    pub frame_range: String,
    /// `Resolution: <w> x <h>`
    pub resolution: String,
    /// `Render cameras: [<a>, <b>]`
    pub render_cameras: String,
    /// `Memory usage: <mb> MB`
    pub memory_usage: String,
    /// `Render time: <s> s`
    pub render_time: String,
}

impl SnapshotSummary {
    /// Formats every measurement of `snapshot`.
    pub fn new(snapshot: &SceneSnapshot) -> Self {
        Self {
            frame_range: format!("Frame range: {}", snapshot.frame_range()),
            resolution: format!("Resolution: {}", snapshot.resolution()),
            render_cameras: format!(
                "Render cameras: [{}]",
                snapshot.renderable_cameras().join(", ")
            ),
            memory_usage: format!("Memory usage: {:.4} MB", snapshot.memory_delta_mb()),
            render_time: format!("Render time: {:.4} s", snapshot.render_duration_s()),
        }
    }

    /// The labels in display order.
    pub fn lines(&self) -> [&str; 5] {
        [
            &self.frame_range,
            &self.resolution,
            &self.render_cameras,
            &self.memory_usage,
            &self.render_time,
        ]
    }
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preflight_core::{FrameRange, Resolution};
    use std::path::PathBuf;

    #[test]
    fn empty_report_reads_all_correct() {
        assert_eq!(ActionReport::default().to_string(), ALL_CORRECT);
        assert_eq!(ActionReport::from_violations(&[]).to_string(), ALL_CORRECT);
    }

    #[test]
    fn violations_are_joined_by_newlines() {
        let report = ActionReport::from_violations(&[
            Violation::new(ViolationKind::MissingAsset, "File not found at: /a.png"),
            Violation::new(ViolationKind::MissingAsset, "File not found at: /b.png"),
        ]);
        assert_eq!(
            report.to_string(),
            "File not found at: /a.png\nFile not found at: /b.png"
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn cache_outcomes_render_their_messages() {
        let path = PathBuf::from("/cache/spiderman_cache.abc");
        assert_eq!(
            ActionReport::from_cache_outcome(&CacheOutcome::AlreadyPresent(path.clone()))
                .to_string(),
            "Cache is already at /cache/spiderman_cache.abc"
        );
        assert_eq!(
            ActionReport::from_cache_outcome(&CacheOutcome::Created(path.clone())).to_string(),
            "Cache is created at /cache/spiderman_cache.abc"
        );
        assert_eq!(
            ActionReport::from_cache_outcome(&CacheOutcome::DeclinedByUser(path)).to_string(),
            "Please add an Alembic cache."
        );
        assert_eq!(
            ActionReport::from_cache_outcome(&CacheOutcome::ExportRootMissing(
                "|spiderman".to_string()
            ))
            .to_string(),
            "Object |spiderman does not exist in the scene."
        );
    }

    #[test]
    fn only_absent_outcomes_produce_a_missing_cache_violation() {
        let declined = cache_violation(&CacheOutcome::DeclinedByUser(PathBuf::new())).unwrap();
        assert_eq!(declined.kind, ViolationKind::MissingCache);
        assert!(cache_violation(&CacheOutcome::Created(PathBuf::new())).is_none());
    }

    #[test]
    fn summary_formats_all_five_labels() {
        let snapshot = SceneSnapshot::new(
            FrameRange::new(1.0, 50.0),
            Resolution::new(1920, 1080),
            vec!["perspShape".to_string(), "shotCamShape".to_string()],
            0.125,
            0.05,
        );
        let summary = SnapshotSummary::new(&snapshot);

        assert_eq!(
            summary.lines(),
            [
                "Frame range: 1 - 50",
                "Resolution: 1920 x 1080",
                "Render cameras: [perspShape, shotCamShape]",
                "Memory usage: 0.1250 MB",
                "Render time: 0.0500 s",
            ]
        );
    }
}
