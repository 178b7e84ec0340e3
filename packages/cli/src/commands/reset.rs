use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use renobook_editor::{ContentStore, FileStorage};

#[derive(Debug, Args)]
pub struct ResetArgs {}

pub fn reset(_args: ResetArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = ContentStore::load(FileStorage::new(config.get_content_dir(cwd)));

    store.reset()?;
    println!("  {} content restored to defaults", "✓".green());

    Ok(())
}
