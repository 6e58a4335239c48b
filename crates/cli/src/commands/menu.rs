//! pdms menu command

use clap::Args;
use console::style;
use shared::DashboardConfig;

#[derive(Debug, Args)]
pub struct MenuCommand {
    /// Emit the visible sections as JSON
    #[arg(long)]
    pub json: bool,
}

impl MenuCommand {
    pub fn run(&self, config: &DashboardConfig) -> anyhow::Result<()> {
        let router = super::open_router(config);
        let sections = router.visible_menu()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&sections)?);
            return Ok(());
        }

        if sections.is_empty() {
            println!("Not logged in - no links to show");
            return Ok(());
        }

        let session = router.session()?;
        println!(
            "Sidebar for {} ({})",
            style(session.username().unwrap_or_default()).bold(),
            session.normalized_role()
        );
        for section in sections {
            println!("\n{}", style(section.title).bold().underlined());
            for link in section.links {
                println!("  {:<20} {}", link.label, style(link.path).dim());
            }
        }
        Ok(())
    }
}
