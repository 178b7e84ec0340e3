use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use renobook_content::ContentPatch;
use renobook_editor::{ContentStore, FileStorage};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            DEFAULT_CONFIG_NAME
        ));
    }

    let config = Config::default();
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // Seed the content snapshot with the built-in defaults
    let mut store = ContentStore::load(FileStorage::new(config.get_content_dir(cwd)));
    store.update(ContentPatch::default())?;
    println!("  {} {}/content.json", "✓".green(), config.content_dir);

    println!();
    println!(
        "{} Run {} to generate the page",
        "Done.".green().bold(),
        "renobook build".bold()
    );

    Ok(())
}
