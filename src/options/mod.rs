//! Rig presets with TOML support.
//!
//! A preset holds the camera projection and a list of named targets. Files
//! live wherever the host keeps them (e.g. `assets/camera_rigs/`) and may be
//! partial: every section uses `#[serde(default)]`.

mod camera;
mod target;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use target::{RotationPreset, TargetPreset};

use crate::error::RigError;

/// Top-level rig options.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigOptions {
    /// Target to select once all presets are added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_target: Option<String>,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Named follow targets.
    pub targets: Vec<TargetPreset>,
}

impl RigOptions {
    /// Generate JSON Schema describing the preset format.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, RigError> {
        toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded camera rig '{}' ({} targets)",
            path.display(),
            options.targets.len()
        );
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)?;
        log::info!("Saved camera rig '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
