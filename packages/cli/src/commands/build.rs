use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use renobook_compiler_html::{render_page, RenderOptions};
use renobook_editor::{ContentStore, FileStorage};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Emit compact HTML without indentation
    #[arg(long)]
    pub compact: bool,
}

pub fn build(args: BuildArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = ContentStore::load(FileStorage::new(config.get_content_dir(cwd)));

    let options = RenderOptions {
        pretty: !args.compact,
        ..RenderOptions::default()
    };
    let html = render_page(store.content(), options);

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) => std::path::PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };
    std::fs::create_dir_all(&out_dir)?;

    let out_path = out_dir.join("index.html");
    std::fs::write(&out_path, html)?;

    println!("  {} {}", "✓".green(), out_path.display());

    Ok(())
}
