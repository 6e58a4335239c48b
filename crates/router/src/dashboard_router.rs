//! DashboardRouter - central navigation orchestrator

use audit::{AuditEntry, AuditLogger, AuditStats};
use auth::SessionStore;
use rbac::{GuardDecision, NavMenu, NavSection, RouteGuard, RouteTable};
use shared::{Logger, Result, Session};
use std::sync::Arc;

/// Result of one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub decision: GuardDecision,
}

/// The central orchestrator.
///
/// Every navigation re-reads the session from the store and re-runs the
/// guards against the route table; no decision is cached between calls.
pub struct DashboardRouter {
    logger: Arc<dyn Logger>,
    table: RouteTable,
    guard: RouteGuard,
    session_store: SessionStore,
    audit_logger: AuditLogger,
}

impl DashboardRouter {
    pub fn new(logger: Arc<dyn Logger>, session_store: SessionStore) -> Self {
        Self {
            guard: RouteGuard::new(logger.clone()),
            logger,
            table: RouteTable::builtin(),
            session_store,
            audit_logger: AuditLogger::default(),
        }
    }

    /// Builder: replace the built-in route table
    pub fn with_table(mut self, table: RouteTable) -> Self {
        self.table = table;
        self
    }

    /// Current session, read fresh from the store
    pub fn session(&self) -> Result<Session> {
        self.session_store.load()
    }

    /// The route permission table
    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Evaluate a navigation to `path`.
    ///
    /// Renders and role denials are audited; a redirect for a missing
    /// session stays silent.
    pub fn navigate(&mut self, path: &str) -> Result<Navigation> {
        let session = self.session_store.load()?;
        let decision = self.table.evaluate(&self.guard, &session, path);

        match &decision {
            GuardDecision::Render => {
                self.audit_logger
                    .log_navigation(&session.normalized_role(), path, true, None);
            }
            GuardDecision::Denied(denial) => {
                self.audit_logger.log_navigation(
                    &denial.role,
                    path,
                    false,
                    Some(&denial.to_string()),
                );
            }
            GuardDecision::RedirectToLogin => {}
        }

        Ok(Navigation {
            path: path.to_string(),
            decision,
        })
    }

    /// Persist a fresh login session (full overwrite of the store)
    pub fn login(&mut self, session: Session) -> Result<()> {
        self.session_store.save(&session)?;
        if session.is_authenticated() {
            self.audit_logger.log_login(
                &session.normalized_role(),
                session.username().unwrap_or_default(),
            );
            self.logger.info(
                &format!(
                    "User '{}' logged in as {}",
                    session.username().unwrap_or_default(),
                    session.normalized_role()
                ),
                None,
            );
        }
        Ok(())
    }

    /// Clear the session atomically
    pub fn logout(&mut self) -> Result<()> {
        let session = self.session_store.load()?;
        self.session_store.clear()?;
        if session.is_authenticated() {
            self.audit_logger.log_logout(&session.normalized_role());
            self.logger.info("Session cleared", None);
        }
        Ok(())
    }

    /// Sidebar sections visible to the current session
    pub fn visible_menu(&self) -> Result<Vec<NavSection>> {
        let session = self.session_store.load()?;
        Ok(NavMenu::new(&self.table).visible_sections(&session))
    }

    pub fn audit_stats(&self) -> AuditStats {
        self.audit_logger.get_stats()
    }

    pub fn recent_audit(&self, limit: usize) -> Vec<&AuditEntry> {
        self.audit_logger.get_recent(limit)
    }

    pub fn recent_denials(&self, limit: usize) -> Vec<&AuditEntry> {
        self.audit_logger.get_recent_denials(limit)
    }
}
