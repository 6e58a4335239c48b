//! # PDMS Router
//!
//! The navigation orchestrator: composes the route table, guards, session
//! store and audit log behind a single surface.

pub mod dashboard_router;

pub use dashboard_router::{DashboardRouter, Navigation};
