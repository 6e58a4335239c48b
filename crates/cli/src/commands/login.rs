//! pdms login command

use api::ApiClient;
use auth::SessionResolver;
use clap::Args;
use console::style;
use indicatif::ProgressBar;
use shared::{ConsoleLogger, DashboardConfig};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Login email; prompted when omitted
    #[arg(short, long)]
    pub username: Option<String>,
}

impl LoginCommand {
    pub async fn run(&self, config: &DashboardConfig) -> anyhow::Result<()> {
        let username = match &self.username {
            Some(u) => u.clone(),
            None => dialoguer::Input::<String>::new()
                .with_prompt("Email")
                .interact_text()?,
        };
        let password = dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?;

        let client = ApiClient::new(config)?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Signing in at {}...", client.base_url()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        let response = client.login(&username, &password).await;
        spinner.finish_and_clear();

        let resolver = SessionResolver::new(Arc::new(ConsoleLogger));
        let session = resolver.resolve(&username, response?);

        let mut router = super::open_router(config);
        router.login(session.clone())?;

        println!(
            "{} Signed in as {} ({})",
            style("✓").green().bold(),
            style(session.username().unwrap_or_default()).bold(),
            session.normalized_role()
        );
        Ok(())
    }
}
