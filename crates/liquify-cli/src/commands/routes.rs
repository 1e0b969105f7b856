use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use liquify_cli::config::AdapterConfig;
use liquify_cli::manifest::route_manifest;
use liquify_cli::templates::template_for;

pub fn execute(config_path: &Path) -> Result<()> {
    let config = AdapterConfig::load_or_default(config_path)?;
    let routes = route_manifest(Path::new(&config.routes_dir), &config.route_ext)?;

    for entry in &routes {
        match template_for(&entry.pattern) {
            Some(template) => println!(
                "{}  {}  {}",
                entry.pattern.bold(),
                entry.route.regex.as_str(),
                template.cyan()
            ),
            None => println!(
                "{}  {}  {}",
                entry.pattern,
                entry.route.regex.as_str(),
                "(no storefront template)".yellow()
            ),
        }
    }

    Ok(())
}
