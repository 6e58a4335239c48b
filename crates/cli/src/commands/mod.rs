//! CLI subcommands

pub mod login;
pub mod menu;
pub mod policy;
pub mod routes;
pub mod session;
pub mod users;

pub use login::LoginCommand;
pub use menu::MenuCommand;
pub use policy::{CheckCommand, RolesCommand};
pub use routes::RoutesCommand;
pub use session::{LogoutCommand, WhoamiCommand};
pub use users::UsersCommand;

use auth::SessionStore;
use router::DashboardRouter;
use shared::{ConsoleLogger, DashboardConfig};
use std::sync::Arc;

/// Router over the configured session file, with console diagnostics
pub(crate) fn open_router(config: &DashboardConfig) -> DashboardRouter {
    let store = SessionStore::new(config.session_file());
    DashboardRouter::new(Arc::new(ConsoleLogger), store)
}
