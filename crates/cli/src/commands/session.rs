//! pdms logout / whoami commands

use clap::Args;
use console::style;
use shared::{DashboardConfig, Session};

#[derive(Debug, Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub fn run(&self, config: &DashboardConfig) -> anyhow::Result<()> {
        let mut router = super::open_router(config);
        let was_logged_in = router.session()?.is_authenticated();
        router.logout()?;

        if was_logged_in {
            println!("{} Session cleared", style("✓").green().bold());
        } else {
            println!("No active session");
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct WhoamiCommand {}

impl WhoamiCommand {
    pub fn run(&self, config: &DashboardConfig) -> anyhow::Result<()> {
        let router = super::open_router(config);
        match router.session()? {
            Session::LoggedOut => println!("Not logged in"),
            session => {
                println!(
                    "Username: {}",
                    style(session.username().unwrap_or_default()).bold()
                );
                println!(
                    "Role:     {} (normalized: {})",
                    session.raw_role().unwrap_or_default(),
                    style(session.normalized_role()).bold()
                );
                println!(
                    "Token:    {}",
                    if session.token().map(str::is_empty) == Some(false) {
                        "present"
                    } else {
                        "missing"
                    }
                );
            }
        }
        Ok(())
    }
}
