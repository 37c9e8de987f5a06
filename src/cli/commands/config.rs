use crate::cli::output::*;
use crate::core::config::{default_config, resolve_config, save_config};
use crate::core::paths;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the directories dnarisk reads and writes
    Paths,
}

pub fn run(args: ConfigArgs, explicit: Option<&Path>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Init { force } => {
            let path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(paths::default_config_path);
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file {} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            save_config(&path, &default_config())?;
            success(&format!("Wrote default configuration to {}", path.display()));
        }
        ConfigCommands::Show => {
            let config = resolve_config(explicit)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommands::Paths => {
            println!("{}", paths::describe_paths());
        }
    }
    Ok(())
}
