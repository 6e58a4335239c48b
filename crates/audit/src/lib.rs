//! # PDMS Audit
//!
//! Audit logging for session and navigation decisions.

pub mod audit_logger;

pub use audit_logger::{AuditEntry, AuditEventType, AuditLogger, AuditStats};
