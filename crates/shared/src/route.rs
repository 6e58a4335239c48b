//! Route permission types

use serde::{Deserialize, Serialize};

/// Dashboard route paths
pub mod paths {
    pub const LOGIN: &str = "/";
    pub const DASHBOARD: &str = "/dashboard";
    pub const AI: &str = "/ai";
    pub const INVENTORY: &str = "/inventory";
    pub const DISPATCH: &str = "/dispatch";
    pub const REGISTER: &str = "/register";
    pub const USERS: &str = "/users";
    pub const INTELLIGENCE: &str = "/intelligence";
    pub const MATERIALS: &str = "/materials";
    pub const MAINTENANCE: &str = "/maintenance";
    pub const PRODUCTION: &str = "/production";
    pub const QC: &str = "/qc";
}

/// How a route is protected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardKind {
    /// No session required (login page)
    Public,
    /// Any authenticated session may enter
    Auth,
    /// Authenticated and the normalized role must appear in `allowed_roles`
    Role,
}

/// A single entry of the route permission table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePermission {
    pub path: String,

    pub guard: GuardKind,

    /// Roles admitted to a `Role`-guarded route; matched case-insensitively
    #[serde(default)]
    pub allowed_roles: Vec<String>,
}

impl RoutePermission {
    /// An unguarded route
    pub fn public(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            guard: GuardKind::Public,
            allowed_roles: Vec::new(),
        }
    }

    /// A route requiring authentication but no particular role
    pub fn auth_only(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            guard: GuardKind::Auth,
            allowed_roles: Vec::new(),
        }
    }

    /// A role-restricted route
    pub fn for_roles<I, S>(path: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            guard: GuardKind::Role,
            allowed_roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive membership check against the allowed-roles list.
    ///
    /// Duplicates in the list are harmless and order carries no meaning.
    pub fn allows_role(&self, normalized_role: &str) -> bool {
        let wanted = normalized_role.to_lowercase();
        self.allowed_roles
            .iter()
            .any(|role| role.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_route_has_no_roles() {
        let route = RoutePermission::public(paths::LOGIN);
        assert_eq!(route.guard, GuardKind::Public);
        assert!(route.allowed_roles.is_empty());
    }

    #[test]
    fn test_auth_only_route() {
        let route = RoutePermission::auth_only(paths::DASHBOARD);
        assert_eq!(route.guard, GuardKind::Auth);
        assert!(route.allowed_roles.is_empty());
    }

    #[test]
    fn test_allows_role_case_insensitive() {
        let route = RoutePermission::for_roles(paths::QC, ["Admin", "QC Incharge"]);

        assert!(route.allows_role("Qc Incharge"));
        assert!(route.allows_role("qc incharge"));
        assert!(route.allows_role("ADMIN"));
        assert!(!route.allows_role("Supervisor"));
    }

    #[test]
    fn test_allows_role_duplicates_harmless() {
        let route = RoutePermission::for_roles("/x", ["Admin", "Admin", "Admin"]);
        assert!(route.allows_role("Admin"));
        assert!(!route.allows_role("Operator"));
    }

    #[test]
    fn test_allows_role_never_matches_empty_list() {
        let route = RoutePermission::auth_only(paths::DASHBOARD);
        assert!(!route.allows_role("Admin"));
    }

    #[test]
    fn test_serde_camel_case() {
        let route = RoutePermission::for_roles("/dispatch", ["Logistics"]);
        let json = serde_json::to_string(&route).unwrap();
        assert!(json.contains("\"allowedRoles\""));
        assert!(json.contains("\"guard\":\"role\""));

        let parsed: RoutePermission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.path, "/dispatch");
        assert!(parsed.allows_role("logistics"));
    }
}
