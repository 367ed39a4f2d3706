//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use taskdeck_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(version)]
#[command(about = "Terminal task list")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Name of the signed-in session shown in the header
    #[arg(long, value_name = "NAME", env = "USER", default_value = "guest")]
    user: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Cli { command, user } = cli;

    // default to the task screen
    let Some(command) = command else {
        let config = config::Config::load().context("load config")?;
        let _log_guard = logging::init(&config::paths::log_path(), &config.log_level)
            .context("init logging")?;
        return commands::run::run(&config, user);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
