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

//! Verifies that texture files referenced by the scene exist on disk.

use preflight_core::platform::{FsPathProbe, PathProbe};
use preflight_core::scene::TextureReference;
use preflight_core::{Violation, ViolationKind};
use std::path::Path;

/// Checks every reference against the local filesystem.
///
/// See [`check_assets_with`].
pub fn check_assets(references: &[TextureReference]) -> Vec<Violation> {
    check_assets_with(&FsPathProbe, references)
}

/// Returns one [`ViolationKind::MissingAsset`] per reference whose file does
/// not exist, in input order.
///
/// An empty or blank path is unresolved and always counts as missing; it is
/// never handed to the filesystem.
pub fn check_assets_with<P>(probe: &P, references: &[TextureReference]) -> Vec<Violation>
where
    P: PathProbe + ?Sized,
{
    references
        .iter()
        .filter(|reference| !is_resolved(probe, &reference.path))
        .map(|reference| {
            log::warn!(
                "Texture missing on node {}: '{}'",
                reference.node.as_deref().unwrap_or("<unknown>"),
                reference.path
            );
            Violation::new(
                ViolationKind::MissingAsset,
                format!("File not found at: {}", reference.path),
            )
        })
        .collect()
}

fn is_resolved<P: PathProbe + ?Sized>(probe: &P, path: &str) -> bool {
    !path.trim().is_empty() && probe.exists(Path::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reports_only_the_missing_texture() {
        let dir = tempdir().unwrap();
        let exists = dir.path().join("exists.png");
        let missing = dir.path().join("missing.png");
        fs::write(&exists, b"png").unwrap();

        let references = vec![
            TextureReference::from_path(exists.to_string_lossy()),
            TextureReference::from_path(missing.to_string_lossy()),
        ];
        let violations = check_assets(&references);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::MissingAsset);
        assert_eq!(
            violations[0].message,
            format!("File not found at: {}", missing.display())
        );
    }

    #[test]
    fn repeated_checks_are_identical() {
        let dir = tempdir().unwrap();
        let references = vec![
            TextureReference::with_node("file1", dir.path().join("a.tx").to_string_lossy()),
            TextureReference::with_node("file2", ""),
        ];

        let first = check_assets(&references);
        let second = check_assets(&references);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn blank_paths_are_missing_without_touching_the_filesystem() {
        struct PanickingProbe;
        impl PathProbe for PanickingProbe {
            fn exists(&self, path: &Path) -> bool {
                panic!("probe called for {path:?}");
            }
        }

        let references = vec![
            TextureReference::from_path(""),
            TextureReference::from_path("   "),
        ];
        let violations = check_assets_with(&PanickingProbe, &references);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn any_existing_path_satisfies_a_texture_reference() {
        let dir = tempdir().unwrap();
        let references = vec![TextureReference::from_path(dir.path().to_string_lossy())];
        assert!(check_assets(&references).is_empty());
    }

    #[test]
    fn empty_reference_list_is_clean() {
        assert!(check_assets(&[]).is_empty());
    }
}
