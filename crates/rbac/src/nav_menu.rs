//! NavMenu - sidebar links derived from the route table

use crate::route_table::RouteTable;
use serde::Serialize;
use shared::{is_admin, paths, GuardKind, Session};

/// A single sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// A titled group of visible links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSection {
    pub title: &'static str,
    pub links: Vec<NavLink>,
}

const CORE_OPERATIONS: &[NavLink] = &[
    NavLink { label: "Dashboard", path: paths::DASHBOARD },
    NavLink { label: "Production", path: paths::PRODUCTION },
    NavLink { label: "Quality Control", path: paths::QC },
    NavLink { label: "Inventory", path: paths::INVENTORY },
    NavLink { label: "Dispatch", path: paths::DISPATCH },
];

const TECHNICAL_INTEL: &[NavLink] = &[
    NavLink { label: "Materials", path: paths::MATERIALS },
    NavLink { label: "Maintenance", path: paths::MAINTENANCE },
    NavLink { label: "Intelligence", path: paths::INTELLIGENCE },
    NavLink { label: "AI Assistant", path: paths::AI },
];

const SYSTEM_ADMIN: &[NavLink] = &[
    NavLink { label: "View Users", path: paths::USERS },
    NavLink { label: "Register Personnel", path: paths::REGISTER },
];

/// Derives the visible sidebar from the current session.
///
/// Link visibility always comes from the route table - the menu keeps no
/// role lists of its own. The System Admin group is the one exception: it is
/// hard-gated on the Admin role rather than the table.
pub struct NavMenu<'a> {
    table: &'a RouteTable,
}

impl<'a> NavMenu<'a> {
    pub fn new(table: &'a RouteTable) -> Self {
        Self { table }
    }

    /// Visible link groups for the session, in sidebar order.
    ///
    /// A logged-out session sees nothing; groups with no visible links are
    /// omitted.
    pub fn visible_sections(&self, session: &Session) -> Vec<NavSection> {
        if !session.is_authenticated() {
            return Vec::new();
        }

        let role = session.normalized_role();
        let mut sections = Vec::new();

        for (title, links) in [
            ("Core Operations", CORE_OPERATIONS),
            ("Technical & Intelligence", TECHNICAL_INTEL),
        ] {
            let visible: Vec<NavLink> = links
                .iter()
                .filter(|link| self.link_visible(link, &role))
                .copied()
                .collect();
            if !visible.is_empty() {
                sections.push(NavSection { title, links: visible });
            }
        }

        if is_admin(&role) {
            sections.push(NavSection {
                title: "System Admin",
                links: SYSTEM_ADMIN.to_vec(),
            });
        }

        sections
    }

    /// Flattened visible paths, handy for assertions and the CLI
    pub fn visible_paths(&self, session: &Session) -> Vec<&'static str> {
        self.visible_sections(session)
            .iter()
            .flat_map(|section| section.links.iter().map(|link| link.path))
            .collect()
    }

    fn link_visible(&self, link: &NavLink, normalized_role: &str) -> bool {
        match self.table.resolve(link.path) {
            Some(permission) => match permission.guard {
                GuardKind::Public | GuardKind::Auth => true,
                GuardKind::Role => permission.allows_role(normalized_role),
            },
            // A link whose path is not routable is never shown.
            None => false,
        }
    }
}
