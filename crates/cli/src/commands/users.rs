//! pdms users command - personnel management

use api::ApiClient;
use clap::{Args, Subcommand};
use console::style;
use shared::DashboardConfig;

#[derive(Debug, Args)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersSubcommand {
    /// List registered personnel
    List,
    /// Delete a user by id
    Delete {
        /// User id
        id: i64,
    },
    /// Register new personnel
    Register {
        /// Login email for the new user
        #[arg(long)]
        email: String,
        /// Role to issue (e.g. operator, plant_manager)
        #[arg(long)]
        role: String,
    },
}

impl UsersCommand {
    pub async fn run(&self, config: &DashboardConfig) -> anyhow::Result<()> {
        let mut router = super::open_router(config);

        // Gate the command exactly like its page route.
        let gate_path = match &self.command {
            UsersSubcommand::Register { .. } => "/register",
            _ => "/users",
        };
        let navigation = router.navigate(gate_path)?;
        if let Some(target) = navigation.decision.redirect_target() {
            println!(
                "{} cannot open {} - redirected to {}",
                style("✗").red().bold(),
                gate_path,
                target
            );
            return Ok(());
        }

        let session = router.session()?;
        let client = ApiClient::new(config)?;

        match &self.command {
            UsersSubcommand::List => {
                let users = client.get_json("/auth/users", &session).await?;
                println!("{}", serde_json::to_string_pretty(&users)?);
            }
            UsersSubcommand::Delete { id } => {
                client
                    .delete(&format!("/auth/users/{}", id), &session)
                    .await?;
                println!("{} User {} deleted", style("✓").green().bold(), id);
            }
            UsersSubcommand::Register { email, role } => {
                let password = dialoguer::Password::new()
                    .with_prompt("Password for the new user")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?;

                let body = serde_json::json!({
                    "email": email,
                    "password": password,
                    "role": role,
                });
                client.post_json("/auth/register", &session, &body).await?;
                println!(
                    "{} Registered {} as {}",
                    style("✓").green().bold(),
                    email,
                    role
                );
            }
        }
        Ok(())
    }
}
