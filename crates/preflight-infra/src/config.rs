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

//! Loads the [`PreflightConfig`] from a TOML file.

use anyhow::{Context, Result};
use preflight_core::PreflightConfig;
use std::fs;
use std::path::Path;

/// The file name looked up by hosts that do not pass an explicit path.
pub const DEFAULT_CONFIG_FILE: &str = "Preflight.toml";

/// Loads the configuration at `path`.
/// If the file does not exist, it returns the default configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<PreflightConfig> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!(
            "No '{}' found. Using default configuration.",
            path.display()
        );
        return Ok(PreflightConfig::default());
    }

    log::info!("Found '{}'. Loading configuration.", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))
}

/// Parses a configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<PreflightConfig> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use preflight_core::cache::CacheFormat;
    use preflight_core::RequirementSet;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const FULL: &str = r#"
[requirements]
start_frame = 1001.0
end_frame = 1096.0
resolution_width = 2048
resolution_height = 858
camera = "shotCamShape"
max_memory_mb = 512.0
max_time_s = 30.0

[cache]
directory = "/shows/spidey/cache"
file_name = "sh010_anim.abc"
export_root = "|sh010|spiderman"
format = "hdf5"
"#;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, PreflightConfig::default());
        assert_eq!(config.requirements, RequirementSet::production());
    }

    #[test]
    fn full_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, FULL).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.requirements.start_frame, 1001.0);
        assert_eq!(config.requirements.resolution_height, 858);
        assert_eq!(config.requirements.camera, "shotCamShape");
        assert_eq!(
            config.cache.output_path(),
            PathBuf::from("/shows/spidey/cache/sh010_anim.abc")
        );
        assert_eq!(config.cache.format, CacheFormat::Hdf5);
    }

    #[test]
    fn format_defaults_to_ogawa() {
        let text = FULL.replace("format = \"hdf5\"\n", "");
        let config = parse_config(&text).unwrap();
        assert_eq!(config.cache.format, CacheFormat::Ogawa);
    }

    #[test]
    fn requirement_fields_have_no_silent_defaults() {
        let text = FULL.replace("max_time_s = 30.0\n", "");
        assert!(parse_config(&text).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = FULL.replace("[cache]", "[cache]\ncompression = true");
        assert!(parse_config(&text).is_err());
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[requirements\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains(DEFAULT_CONFIG_FILE));
    }
}
