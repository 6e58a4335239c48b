//! pdms check / roles commands

use clap::Args;
use console::style;
use rbac::{GuardDecision, RouteGuard, RouteTable};
use shared::{normalize_role, ConsoleLogger, Session};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Role to evaluate, in any casing the backend might issue
    #[arg(short, long)]
    pub role: String,

    /// Route path to evaluate
    #[arg(short, long)]
    pub path: String,
}

impl CheckCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let table = RouteTable::builtin();
        let guard = RouteGuard::new(Arc::new(ConsoleLogger));
        let session = Session::logged_in("policy-check", &self.role, "");

        let normalized = normalize_role(Some(self.role.as_str()));
        match table.evaluate(&guard, &session, &self.path) {
            GuardDecision::Render => {
                println!(
                    "{} {} may open {}",
                    style("ALLOW").green().bold(),
                    normalized,
                    self.path
                );
            }
            GuardDecision::Denied(denial) => {
                println!(
                    "{} {} is turned back from {} (redirect to /dashboard)",
                    style("DENY").red().bold(),
                    denial.role,
                    denial.path
                );
            }
            GuardDecision::RedirectToLogin => {
                println!(
                    "{} {} is not a routed page (redirect to /)",
                    style("DENY").red().bold(),
                    self.path
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct RolesCommand {}

impl RolesCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let table = RouteTable::builtin();

        let mut roles: Vec<&str> = table
            .routes()
            .iter()
            .flat_map(|route| route.allowed_roles.iter().map(String::as_str))
            .collect();
        roles.sort();
        roles.dedup();

        println!("Roles known to the route table:");
        for role in roles {
            println!("  {}", role);
        }
        Ok(())
    }
}
