//! yaap-theme CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use yaap_theme_cli_lib::{observability, CreateCommand, CreateOutcome};

#[derive(Parser)]
#[command(name = "yaap-theme")]
#[command(version)]
#[command(about = "Generate themes for YAAP applications", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Never prompt; missing answers use defaults
    #[arg(short = 'n', long, global = true)]
    no_interaction: bool,

    /// Project root containing package.json
    #[arg(long, global = true, value_name = "DIR")]
    project_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a tailwind based theme structure
    #[command(alias = "create-v2")]
    Create {
        /// A name of the new theme
        name: Option<String>,
        /// Force create theme with same name
        #[arg(long)]
        force: bool,
        /// Theme description
        #[arg(long)]
        description: Option<String>,
        /// Theme author name
        #[arg(long)]
        author: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let project_root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let interactive = !cli.no_interaction && console::user_attended_stderr();

    match cli.command {
        Commands::Create {
            name,
            force,
            description,
            author,
        } => {
            let cmd = CreateCommand::new(name, project_root)
                .force(force)
                .interactive(interactive)
                .description(description)
                .author(author);

            match cmd.execute()? {
                CreateOutcome::Created(_) => Ok(ExitCode::SUCCESS),
                CreateOutcome::Aborted => Ok(ExitCode::FAILURE),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_flags() {
        let cli = Cli::try_parse_from([
            "yaap-theme",
            "create",
            "aurora",
            "--force",
            "--author",
            "Jo",
            "-n",
        ])
        .unwrap();
        assert!(cli.no_interaction);
        let Commands::Create {
            name,
            force,
            author,
            description,
        } = cli.command;
        assert_eq!(name.as_deref(), Some("aurora"));
        assert!(force);
        assert_eq!(author.as_deref(), Some("Jo"));
        assert!(description.is_none());
    }

    #[test]
    fn test_create_v2_alias() {
        let cli = Cli::try_parse_from(["yaap-theme", "create-v2"]).unwrap();
        let Commands::Create { name, force, .. } = cli.command;
        assert!(name.is_none());
        assert!(!force);
    }
}
