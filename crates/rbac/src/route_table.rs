//! RouteTable - the declarative route permission table

use crate::guard::{GuardDecision, RouteGuard};
use shared::{paths, roles, RoutePermission, Session};

/// Maps each dashboard path to its guard and allowed roles.
///
/// This table is the single source of truth for per-route access: the
/// router and the navigation menu both read it, so the two can never
/// drift apart. Paths missing from the table fall through to a login
/// redirect.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RoutePermission>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route, replacing any previous entry for the same path
    pub fn register(&mut self, permission: RoutePermission) {
        self.routes.retain(|r| r.path != permission.path);
        self.routes.push(permission);
    }

    /// The built-in dashboard table
    pub fn builtin() -> Self {
        let everyone = [
            roles::ADMIN,
            roles::PLANT_MANAGER,
            roles::SUPERVISOR,
            roles::OPERATOR,
        ];

        let mut table = Self::new();
        table.register(RoutePermission::public(paths::LOGIN));
        table.register(RoutePermission::auth_only(paths::DASHBOARD));
        table.register(RoutePermission::for_roles(paths::AI, everyone));
        table.register(RoutePermission::for_roles(paths::INVENTORY, everyone));
        table.register(RoutePermission::for_roles(
            paths::DISPATCH,
            [roles::ADMIN, roles::PLANT_MANAGER, roles::LOGISTICS],
        ));
        table.register(RoutePermission::for_roles(paths::REGISTER, [roles::ADMIN]));
        table.register(RoutePermission::for_roles(paths::USERS, [roles::ADMIN]));
        table.register(RoutePermission::for_roles(
            paths::INTELLIGENCE,
            [roles::ADMIN, roles::PLANT_MANAGER],
        ));
        table.register(RoutePermission::for_roles(
            paths::MATERIALS,
            [roles::ADMIN, roles::PLANT_MANAGER, roles::SUPERVISOR],
        ));
        table.register(RoutePermission::for_roles(
            paths::MAINTENANCE,
            [roles::ADMIN, roles::PLANT_MANAGER, roles::SUPERVISOR],
        ));
        table.register(RoutePermission::for_roles(paths::PRODUCTION, everyone));
        table.register(RoutePermission::for_roles(
            paths::QC,
            [
                roles::ADMIN,
                roles::PLANT_MANAGER,
                roles::QC_INCHARGE,
                roles::OPERATOR,
            ],
        ));
        table
    }

    /// Look up the permission entry for a path
    pub fn resolve(&self, path: &str) -> Option<&RoutePermission> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn has_route(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    /// All entries, in declaration order
    pub fn routes(&self) -> &[RoutePermission] {
        &self.routes
    }

    /// Evaluate a navigation, applying the catch-all: any path not in the
    /// table redirects to login
    pub fn evaluate(&self, guard: &RouteGuard, session: &Session, path: &str) -> GuardDecision {
        match self.resolve(path) {
            Some(permission) => guard.evaluate(session, permission),
            None => GuardDecision::RedirectToLogin,
        }
    }
}
