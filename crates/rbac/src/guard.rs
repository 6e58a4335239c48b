//! RouteGuard - authentication and role gating

use shared::{paths, AccessDeniedError, GuardKind, Logger, RoutePermission, Session};
use std::sync::Arc;

/// Joint state of the auth and role guards for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    AuthenticatedNoAccess,
    AuthenticatedWithAccess,
}

/// Terminal rendering decision for a navigation.
///
/// Both redirects replace history, so the guarded page is never reachable
/// through back-navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page
    Render,
    /// No session - replace history with the login page
    RedirectToLogin,
    /// Authenticated but forbidden - replace history with the dashboard,
    /// never the login page
    Denied(AccessDeniedError),
}

impl GuardDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Path the client must navigate to instead, if any
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin => Some(paths::LOGIN),
            Self::Denied(_) => Some(paths::DASHBOARD),
        }
    }

    pub fn access_state(&self) -> AccessState {
        match self {
            Self::Render => AccessState::AuthenticatedWithAccess,
            Self::RedirectToLogin => AccessState::Unauthenticated,
            Self::Denied(_) => AccessState::AuthenticatedNoAccess,
        }
    }

    /// The typed denial, when the decision is a dashboard redirect
    pub fn denial(&self) -> Option<&AccessDeniedError> {
        match self {
            Self::Denied(denial) => Some(denial),
            _ => None,
        }
    }
}

/// Evaluates route access for a session.
///
/// Evaluation is synchronous pure computation over the session and the
/// route's permission entry; nothing is cached between navigations.
pub struct RouteGuard {
    logger: Arc<dyn Logger>,
}

impl RouteGuard {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Auth guard: any authenticated session may pass
    pub fn check_auth(&self, session: &Session) -> GuardDecision {
        if session.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::RedirectToLogin
        }
    }

    /// Role guard: authenticated and the normalized role must appear in the
    /// route's allowed-roles list
    pub fn check_role(&self, session: &Session, permission: &RoutePermission) -> GuardDecision {
        if !session.is_authenticated() {
            return GuardDecision::RedirectToLogin;
        }

        let user_role = session.normalized_role();
        if permission.allows_role(&user_role) {
            return GuardDecision::Render;
        }

        let denial = AccessDeniedError {
            role: user_role,
            path: permission.path.clone(),
        };
        self.logger.warn(&denial.to_string(), None);
        GuardDecision::Denied(denial)
    }

    /// Dispatch on the route's guard kind
    pub fn evaluate(&self, session: &Session, permission: &RoutePermission) -> GuardDecision {
        match permission.guard {
            GuardKind::Public => GuardDecision::Render,
            GuardKind::Auth => self.check_auth(session),
            GuardKind::Role => self.check_role(session, permission),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NullLogger;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Captures warn-level diagnostics for assertions
    #[derive(Default)]
    struct RecordingLogger {
        warnings: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
        fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
        fn warn(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
        fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    }

    fn guard() -> RouteGuard {
        RouteGuard::new(Arc::new(NullLogger))
    }

    // ============== Auth Guard Tests ==============

    #[test]
    fn test_auth_guard_redirects_logged_out_to_login() {
        let decision = guard().check_auth(&Session::LoggedOut);
        assert_eq!(decision, GuardDecision::RedirectToLogin);
        assert_eq!(decision.redirect_target(), Some("/"));
        assert_eq!(decision.access_state(), AccessState::Unauthenticated);
    }

    #[test]
    fn test_auth_guard_renders_for_any_authenticated_session() {
        let session = Session::logged_in("ravi", "logistics", "jwt");
        let decision = guard().check_auth(&session);
        assert!(decision.is_render());
        assert_eq!(decision.redirect_target(), None);
    }

    // ============== Role Guard Tests ==============

    #[test]
    fn test_role_guard_unauthenticated_goes_to_login_not_dashboard() {
        let permission = RoutePermission::for_roles("/register", ["Admin"]);
        let decision = guard().check_role(&Session::LoggedOut, &permission);
        assert_eq!(decision, GuardDecision::RedirectToLogin);
        assert_eq!(decision.redirect_target(), Some("/"));
    }

    #[test]
    fn test_role_guard_denies_supervisor_on_register() {
        let logger = Arc::new(RecordingLogger::default());
        let guard = RouteGuard::new(logger.clone());

        let session = Session::logged_in("dinesh", "supervisor", "jwt");
        let permission = RoutePermission::for_roles("/register", ["Admin"]);

        let decision = guard.check_role(&session, &permission);
        assert_eq!(decision.redirect_target(), Some("/dashboard"));
        assert_eq!(decision.access_state(), AccessState::AuthenticatedNoAccess);

        let denial = decision.denial().unwrap();
        assert_eq!(denial.role, "Supervisor");
        assert_eq!(denial.path, "/register");

        let warnings = logger.warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Supervisor"));
        assert!(warnings[0].contains("/register"));
    }

    #[test]
    fn test_role_guard_matches_raw_backend_casing() {
        let session = Session::logged_in("meera", "PLANT_MANAGER", "jwt");
        let permission =
            RoutePermission::for_roles("/materials", ["Admin", "Plant Manager", "Supervisor"]);

        let decision = guard().check_role(&session, &permission);
        assert!(decision.is_render());
        assert_eq!(decision.access_state(), AccessState::AuthenticatedWithAccess);
    }

    #[test]
    fn test_role_guard_blank_role_defaults_to_operator() {
        let session = Session::logged_in("anon", "", "jwt");

        let operator_route = RoutePermission::for_roles("/production", ["Admin", "Operator"]);
        assert!(guard().check_role(&session, &operator_route).is_render());

        let admin_route = RoutePermission::for_roles("/users", ["Admin"]);
        let decision = guard().check_role(&session, &admin_route);
        assert_eq!(decision.denial().unwrap().role, "Operator");
    }

    #[test]
    fn test_role_guard_no_warning_on_success() {
        let logger = Arc::new(RecordingLogger::default());
        let guard = RouteGuard::new(logger.clone());

        let session = Session::logged_in("admin", "admin", "jwt");
        let permission = RoutePermission::for_roles("/users", ["Admin"]);
        assert!(guard.check_role(&session, &permission).is_render());
        assert!(logger.warnings.lock().unwrap().is_empty());
    }

    // ============== Dispatch Tests ==============

    #[test]
    fn test_evaluate_public_renders_without_session() {
        let permission = RoutePermission::public("/");
        assert!(guard().evaluate(&Session::LoggedOut, &permission).is_render());
    }

    #[test]
    fn test_evaluate_auth_route_ignores_role() {
        let permission = RoutePermission::auth_only("/dashboard");
        let session = Session::logged_in("x", "some_unknown_role", "jwt");
        assert!(guard().evaluate(&session, &permission).is_render());
    }

    #[test]
    fn test_evaluate_role_route_dispatches_to_role_guard() {
        let permission = RoutePermission::for_roles("/dispatch", ["Logistics"]);
        let session = Session::logged_in("x", "operator", "jwt");
        let decision = guard().evaluate(&session, &permission);
        assert_eq!(decision.redirect_target(), Some("/dashboard"));
    }

    #[test]
    fn test_decisions_carry_no_cached_state() {
        // The same guard re-evaluates from scratch: a session change between
        // calls changes the outcome.
        let guard = guard();
        let permission = RoutePermission::for_roles("/qc", ["QC Incharge"]);

        let before = Session::logged_in("u", "operator", "jwt");
        assert!(!guard.evaluate(&before, &permission).is_render());

        let after = Session::logged_in("u", "qc_incharge", "jwt");
        assert!(guard.evaluate(&after, &permission).is_render());
    }
}
