//! PDMS CLI - Console for the plant dashboard RBAC core
//!
//! Usage:
//!   pdms                          - Start interactive mode
//!   pdms login                    - Log in against the backend
//!   pdms logout                   - Clear the stored session
//!   pdms whoami                   - Show the stored session
//!   pdms check --role <r> --path <p>  - Evaluate the permission matrix
//!   pdms routes                   - Show the route permission table
//!   pdms roles                    - List roles known to the table
//!   pdms menu                     - Show the sidebar for the current session
//!   pdms users <list|delete|register>  - Personnel management

use clap::{Parser, Subcommand};
use cli::commands::{
    CheckCommand, LoginCommand, LogoutCommand, MenuCommand, RolesCommand, RoutesCommand,
    UsersCommand, WhoamiCommand,
};
use cli::interactive::InteractiveCli;
use shared::DashboardConfig;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdms")]
#[command(about = "MCC PDMS - Role-gated plant dashboard console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in against the backend and persist the session
    Login(LoginCommand),
    /// Clear the stored session
    Logout(LogoutCommand),
    /// Show the stored session
    Whoami(WhoamiCommand),
    /// Evaluate the permission matrix for a role and path
    Check(CheckCommand),
    /// Show the route permission table
    Routes(RoutesCommand),
    /// List roles known to the route table
    Roles(RolesCommand),
    /// Show the sidebar for the current session
    Menu(MenuCommand),
    /// Personnel management (role-gated like its pages)
    Users(UsersCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Login(cmd)) => cmd.run(&config).await,
        Some(Commands::Logout(cmd)) => cmd.run(&config),
        Some(Commands::Whoami(cmd)) => cmd.run(&config),
        Some(Commands::Check(cmd)) => cmd.run(),
        Some(Commands::Routes(cmd)) => cmd.run(),
        Some(Commands::Roles(cmd)) => cmd.run(),
        Some(Commands::Menu(cmd)) => cmd.run(&config),
        Some(Commands::Users(cmd)) => cmd.run(&config).await,
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(config)?;
            interactive.run().await
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(explicit) => Ok(DashboardConfig::from_file(explicit)?),
        None => {
            let default = Path::new("config.json");
            if default.exists() {
                Ok(DashboardConfig::from_file(default)?)
            } else {
                Ok(DashboardConfig::default())
            }
        }
    }
}
