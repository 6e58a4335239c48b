//! Interactive REPL mode

use api::ApiClient;
use auth::{SessionResolver, SessionStore};
use console::style;
use rbac::GuardDecision;
use router::DashboardRouter;
use shared::{ConsoleLogger, DashboardConfig};
use std::io::{self, Write};
use std::sync::Arc;

/// Interactive console for exploring the permission matrix.
///
/// Any input starting with `/` is treated as a navigation; bare words are
/// commands.
pub struct InteractiveCli {
    router: DashboardRouter,
    client: ApiClient,
}

impl InteractiveCli {
    pub fn new(config: DashboardConfig) -> anyhow::Result<Self> {
        let store = SessionStore::new(config.session_file());
        let router = DashboardRouter::new(Arc::new(ConsoleLogger), store);
        let client = ApiClient::new(&config)?;
        Ok(Self { router, client })
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("PDMS Interactive Mode");
        println!("Enter a route path (e.g. /dashboard) to navigate; 'help' for commands");
        println!();

        loop {
            // Print prompt
            let role = match self.router.session() {
                Ok(session) if session.is_authenticated() => session.normalized_role(),
                _ => "logged out".to_string(),
            };
            print!("[{}] > ", role);
            io::stdout().flush()?;

            // Read input
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.dispatch(input).await {
                Ok(should_exit) if should_exit => break,
                Ok(_) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }
        Ok(())
    }

    /// Handle one line of input; returns true to exit
    async fn dispatch(&mut self, input: &str) -> anyhow::Result<bool> {
        match input {
            "quit" | "exit" => return Ok(true),
            "help" => self.print_help(),
            "login" => self.login().await?,
            "logout" => {
                self.router.logout()?;
                println!("Session cleared");
            }
            "whoami" => {
                let session = self.router.session()?;
                if session.is_authenticated() {
                    println!(
                        "{} ({})",
                        session.username().unwrap_or_default(),
                        session.normalized_role()
                    );
                } else {
                    println!("Not logged in");
                }
            }
            "menu" => self.print_menu()?,
            "routes" => {
                for route in self.router.routes().routes() {
                    println!("  {}", route.path);
                }
            }
            "audit" => {
                for entry in self.router.recent_audit(10) {
                    println!(
                        "  {} {:?} {} {}",
                        entry.timestamp,
                        entry.event_type,
                        entry.role,
                        entry.path.as_deref().unwrap_or("-")
                    );
                }
            }
            path if path.starts_with('/') => self.navigate(path)?,
            other => println!("Unknown command '{}'; try 'help'", other),
        }
        Ok(false)
    }

    fn navigate(&mut self, path: &str) -> anyhow::Result<()> {
        let navigation = self.router.navigate(path)?;
        match &navigation.decision {
            GuardDecision::Render => {
                println!("{} {}", style("RENDER").green().bold(), path);
            }
            GuardDecision::RedirectToLogin => {
                println!(
                    "{} -> / {}",
                    style("REDIRECT").yellow().bold(),
                    style("(login required)").dim()
                );
            }
            GuardDecision::Denied(denial) => {
                println!(
                    "{} -> /dashboard {}",
                    style("REDIRECT").red().bold(),
                    style(format!("(role {} lacks access)", denial.role)).dim()
                );
            }
        }
        Ok(())
    }

    async fn login(&mut self) -> anyhow::Result<()> {
        let username = dialoguer::Input::<String>::new()
            .with_prompt("Email")
            .interact_text()?;
        let password = dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?;

        let response = self.client.login(&username, &password).await?;
        let resolver = SessionResolver::new(Arc::new(ConsoleLogger));
        let session = resolver.resolve(&username, response);

        println!(
            "Signed in as {} ({})",
            session.username().unwrap_or_default(),
            session.normalized_role()
        );
        self.router.login(session)?;
        Ok(())
    }

    fn print_menu(&self) -> anyhow::Result<()> {
        let sections = self.router.visible_menu()?;
        if sections.is_empty() {
            println!("Not logged in - no links to show");
            return Ok(());
        }
        for section in sections {
            println!("{}", style(section.title).bold());
            for link in section.links {
                println!("  {:<20} {}", link.label, link.path);
            }
        }
        Ok(())
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /<path>   Navigate to a route (e.g. /qc)");
        println!("  login     Sign in against the backend");
        println!("  logout    Clear the stored session");
        println!("  whoami    Show the stored session");
        println!("  menu      Show the visible sidebar");
        println!("  routes    List routed paths");
        println!("  audit     Show recent navigation decisions");
        println!("  quit      Exit");
    }
}
