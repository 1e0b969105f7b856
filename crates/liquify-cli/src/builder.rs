use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::config::BuildCommands;

/// External build system collaborator.
///
/// The adapter never runs the framework's own build pipeline. It asks this
/// seam to copy the client runtime files, copy static assets, and prerender
/// routes into a scratch directory, in that order; the prerender call must
/// have completed before any manifest scan starts.
pub trait Builder {
    fn copy_client_files(&self, dest: &Path) -> Result<()>;
    fn copy_static_files(&self, dest: &Path) -> Result<()>;
    fn prerender(&self, dest: &Path, force: bool) -> Result<()>;
}

/// Runs the commands configured under `[build]` in `liquify.toml`.
pub struct CommandBuilder {
    commands: BuildCommands,
}

impl CommandBuilder {
    pub fn new(commands: BuildCommands) -> Self {
        Self { commands }
    }

    fn run(&self, step: &str, command: Option<&str>, dest: &Path, force: Option<bool>) -> Result<()> {
        let command = command.ok_or_else(|| {
            anyhow::anyhow!("No [build] {} command configured in liquify.toml", step)
        })?;

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).env("LIQUIFY_DEST", dest);
        if let Some(force) = force {
            cmd.env("LIQUIFY_FORCE", if force { "1" } else { "0" });
        }

        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute {} command", step))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} command failed: {}",
                step,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        Ok(())
    }
}

impl Builder for CommandBuilder {
    fn copy_client_files(&self, dest: &Path) -> Result<()> {
        self.run("client", self.commands.client.as_deref(), dest, None)
    }

    fn copy_static_files(&self, dest: &Path) -> Result<()> {
        self.run(
            "static_files",
            self.commands.static_files.as_deref(),
            dest,
            None,
        )
    }

    fn prerender(&self, dest: &Path, force: bool) -> Result<()> {
        self.run(
            "prerender",
            self.commands.prerender.as_deref(),
            dest,
            Some(force),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn command_receives_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("client");
        let builder = CommandBuilder::new(BuildCommands {
            client: Some("mkdir -p \"$LIQUIFY_DEST\" && touch \"$LIQUIFY_DEST/ok\"".to_string()),
            ..BuildCommands::default()
        });

        builder.copy_client_files(&dest).unwrap();
        assert!(dest.join("ok").exists());
    }

    #[test]
    fn prerender_exports_force_flag() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("prerendered");
        let builder = CommandBuilder::new(BuildCommands {
            prerender: Some(
                "mkdir -p \"$LIQUIFY_DEST\" && echo \"$LIQUIFY_FORCE\" > \"$LIQUIFY_DEST/force\""
                    .to_string(),
            ),
            ..BuildCommands::default()
        });

        builder.prerender(&dest, true).unwrap();
        let force = std::fs::read_to_string(dest.join("force")).unwrap();
        assert_eq!(force.trim(), "1");
    }

    #[test]
    fn missing_command_is_an_error() {
        let builder = CommandBuilder::new(BuildCommands::default());
        let err = builder.prerender(Path::new("scratch"), true).unwrap_err();
        assert!(err.to_string().contains("prerender"));
    }

    #[test]
    fn failing_command_surfaces_stderr() {
        let builder = CommandBuilder::new(BuildCommands {
            prerender: Some("echo boom >&2; exit 1".to_string()),
            ..BuildCommands::default()
        });
        let err = builder.prerender(Path::new("scratch"), true).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
