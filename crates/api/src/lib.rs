//! # PDMS API
//!
//! HTTP client for the plant-management REST backend. The RBAC core never
//! touches the network; pages and the CLI go through this client.

pub mod client;

pub use client::ApiClient;
