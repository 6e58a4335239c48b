//! pdms routes command

use clap::Args;
use console::style;
use rbac::RouteTable;
use shared::GuardKind;

#[derive(Debug, Args)]
pub struct RoutesCommand {
    /// Emit the table as JSON
    #[arg(long)]
    pub json: bool,
}

impl RoutesCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let table = RouteTable::builtin();

        if self.json {
            println!("{}", serde_json::to_string_pretty(table.routes())?);
            return Ok(());
        }

        println!("{:<14} {:<8} ALLOWED ROLES", "PATH", "GUARD");
        for route in table.routes() {
            let access = match route.guard {
                GuardKind::Public => style("public").dim().to_string(),
                GuardKind::Auth => style("any authenticated role").dim().to_string(),
                GuardKind::Role => route.allowed_roles.join(", "),
            };
            let guard = match route.guard {
                GuardKind::Public => "public",
                GuardKind::Auth => "auth",
                GuardKind::Role => "role",
            };
            println!("{:<14} {:<8} {}", route.path, guard, access);
        }
        Ok(())
    }
}
