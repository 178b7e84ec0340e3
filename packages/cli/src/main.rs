mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, init, reset, set, BuildArgs, InitArgs, ResetArgs, SetArgs};

/// RenoBook CLI - build and edit the RenoBook site content
#[derive(Parser, Debug)]
#[command(name = "renobook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a config file and seed the default content
    Init(InitArgs),

    /// Render the content tree to a static HTML page
    Build(BuildArgs),

    /// Edit one field of one content entry
    Set(SetArgs),

    /// Restore the built-in default content
    Reset(ResetArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Build(args) => build(args, &cwd),
        Command::Set(args) => set(args, &cwd),
        Command::Reset(args) => reset(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
