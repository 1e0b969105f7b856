use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Adapter configuration (`liquify.toml`)
///
/// Every field has a conventional default, so a project without a config
/// file still adapts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Output directory for the storefront-shaped tree.
    pub out: String,
    /// Directory holding route definition files.
    pub routes_dir: String,
    /// Route component extension stripped when deriving pattern strings.
    pub route_ext: String,
    /// Theme tree copied verbatim into the output.
    pub theme_dir: String,
    /// External build system commands.
    pub build: BuildCommands,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            out: "build".to_string(),
            routes_dir: "src/routes".to_string(),
            route_ext: ".svelte".to_string(),
            theme_dir: "theme".to_string(),
            build: BuildCommands::default(),
        }
    }
}

/// Shell commands delegated to the external build system.
///
/// Each command runs with `LIQUIFY_DEST` exported; the prerender command
/// additionally receives `LIQUIFY_FORCE`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildCommands {
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub static_files: Option<String>,
    #[serde(default)]
    pub prerender: Option<String>,
}

impl AdapterConfig {
    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::from_str(&content)?)
    }

    /// Load from the given path, falling back to defaults when the file is
    /// absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_fields_missing() {
        let config = AdapterConfig::from_str("out = \"dist\"\n").unwrap();
        assert_eq!(config.out, "dist");
        assert_eq!(config.routes_dir, "src/routes");
        assert_eq!(config.route_ext, ".svelte");
        assert_eq!(config.theme_dir, "theme");
        assert_eq!(config.build.prerender, None);
    }

    #[test]
    fn build_commands_parse() {
        let config =
            AdapterConfig::from_str("[build]\nprerender = \"npm run prerender\"\n").unwrap();
        assert_eq!(config.build.prerender.as_deref(), Some("npm run prerender"));
        assert_eq!(config.out, "build");
    }
}
