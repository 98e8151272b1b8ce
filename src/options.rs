//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (value formatting, keybindings) are
//! consolidated here. Options serialize to/from TOML so an embedding
//! application can ship presets, and expose a JSON schema for options
//! UIs.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CaliperError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[format]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Measurement value formatting.
    pub format: FormatOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CaliperError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CaliperError::OptionsParse(format!(
                "failed to parse {}: {e}",
                path.display()
            ))
        })
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CaliperError> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            CaliperError::OptionsParse(format!(
                "failed to serialize options: {e}"
            ))
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
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

/// Decimal places for displayed measurement values.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(default)]
pub struct FormatOptions {
    /// Decimal places for distances ("2.45 Å").
    pub distance_decimals: u8,
    /// Decimal places for angles and torsions ("109.5°").
    pub angle_decimals: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            distance_decimals: 2,
            angle_decimals: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormatOptions, Options};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[format]
angle_decimals = 3
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.format.angle_decimals, 3);
        // Everything else should be default
        assert_eq!(opts.format.distance_decimals, 2);
        assert!(opts.keybindings.lookup("Escape").is_some());
    }

    #[test]
    fn save_and_load_preset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("compact.toml");

        let mut opts = Options::default();
        opts.format = FormatOptions {
            distance_decimals: 1,
            angle_decimals: 0,
        };
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);

        let presets = Options::list_presets(path.parent().unwrap());
        assert_eq!(presets, vec!["compact".to_owned()]);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "format = \"not a table\"").unwrap();
        assert!(Options::load(&path).is_err());
    }

    #[test]
    fn options_expose_a_json_schema() {
        let schema = schemars::schema_for!(Options);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("distance_decimals"));
    }
}
