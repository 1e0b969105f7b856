use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use liquify_cli::{Adapter, AdapterConfig, CommandBuilder};

pub fn execute(out: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = AdapterConfig::load_or_default(config_path)?;
    if let Some(out) = out {
        config.out = out.to_string();
    }

    println!("{}", "Adapting build output...".green().bold());
    println!();
    println!("Output: {}", config.out.cyan());
    println!();

    let builder = CommandBuilder::new(config.build.clone());
    Adapter::new(config).adapt(&builder)?;

    println!();
    println!("{}", "Storefront theme ready!".green().bold());

    Ok(())
}
