//! Adapter orchestration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::builder::Builder;
use crate::config::AdapterConfig;
use crate::fsutil::{copy_directory, remove_dir_if_exists};
use crate::manifest::{file_manifest, prerendered_manifest, route_manifest};
use crate::materialize::{materialize_assets, materialize_templates};

/// Sequences the whole repackaging run.
///
/// Fully sequential and fail-fast: a failed step aborts the run and may
/// leave a partially populated output directory behind. The filesystem is
/// treated as exclusively owned by one run; concurrent invocations are not
/// guarded against.
pub struct Adapter {
    config: AdapterConfig,
}

impl Adapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn out_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.out)
    }

    /// Runs the pipeline against the external build system.
    pub fn adapt(&self, builder: &dyn Builder) -> Result<()> {
        let out = self.out_dir();
        let theme_dir = out.join("theme");
        let assets_dir = theme_dir.join("assets");
        let prerendered_dir = out.join("prerendered");
        let app_dir = out.join("_app");

        std::fs::create_dir_all(&out)
            .with_context(|| format!("Failed to create {}", out.display()))?;

        println!("  {} Copying theme files...", "→".cyan());
        let theme_src = Path::new(&self.config.theme_dir);
        if !theme_src.exists() {
            anyhow::bail!("Theme directory '{}' does not exist", theme_src.display());
        }
        copy_directory(theme_src, &theme_dir)
            .with_context(|| format!("Failed to copy {}", theme_src.display()))?;
        std::fs::create_dir_all(&assets_dir)?;

        println!("  {} Copying client and static files...", "→".cyan());
        builder.copy_client_files(&out)?;
        builder.copy_static_files(&assets_dir)?;

        println!("  {} Prerendering routes...", "→".cyan());
        builder.prerender(&prerendered_dir, true)?;

        println!("  {} Building manifests...", "→".cyan());
        let files = file_manifest(&out, &self.config.route_ext)?;
        let routes = route_manifest(Path::new(&self.config.routes_dir), &self.config.route_ext)?;
        let prerendered = prerendered_manifest(&prerendered_dir)?;

        println!("  {} Rewriting built assets...", "→".cyan());
        materialize_assets(&files)?;

        println!("  {} Materializing templates...", "→".cyan());
        let written = materialize_templates(&out, &routes, &prerendered, &files)?;
        for path in &written {
            println!("    {} {}", "✓".green(), path.display());
        }

        remove_dir_if_exists(&prerendered_dir)?;
        remove_dir_if_exists(&app_dir)?;

        println!("  {} Adapted {} template(s)", "✓".green(), written.len());
        Ok(())
    }
}
