//! AuditLogger - audit logging for PDMS navigation decisions

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub event_type: AuditEventType,
    /// Normalized role the decision was made for
    pub role: String,
    pub path: Option<String>,
    pub success: bool,
    pub reason: Option<String>,
}

/// Types of audit events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    Login,
    Logout,
    RouteAllowed,
    RouteDenied,
}

/// Bounded in-memory audit log.
///
/// Denials are recorded here as queryable events rather than disappearing
/// into a console line.
#[derive(Debug)]
pub struct AuditLogger {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AuditLogger {
    /// Create a new AuditLogger
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: AuditEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Log a successful login
    pub fn log_login(&mut self, role: &str, username: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::Login,
            role: role.to_string(),
            path: None,
            success: true,
            reason: Some(format!("User '{}' logged in", username)),
        });
    }

    /// Log a logout
    pub fn log_logout(&mut self, role: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::Logout,
            role: role.to_string(),
            path: None,
            success: true,
            reason: None,
        });
    }

    /// Log a navigation decision
    pub fn log_navigation(&mut self, role: &str, path: &str, allowed: bool, reason: Option<&str>) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: if allowed {
                AuditEventType::RouteAllowed
            } else {
                AuditEventType::RouteDenied
            },
            role: role.to_string(),
            path: Some(path.to_string()),
            success: allowed,
            reason: reason.map(|s| s.to_string()),
        });
    }

    /// Get recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Get recent denials, newest first
    pub fn get_recent_denials(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.success)
            .take(limit)
            .collect()
    }

    /// Get statistics
    pub fn get_stats(&self) -> AuditStats {
        let total = self.entries.len();
        let denials = self.entries.iter().filter(|e| !e.success).count();

        AuditStats {
            total_entries: total,
            denial_count: denials,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Audit statistics
#[derive(Debug, Clone)]
pub struct AuditStats {
    pub total_entries: usize,
    pub denial_count: usize,
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new(10000)
    }
}
