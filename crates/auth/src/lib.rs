//! # PDMS Auth
//!
//! Login response resolution and session persistence.
//!
//! ## Components
//!
//! - `SessionResolver` - Turn a backend login response into a `Session`
//! - `SessionStore` - File-backed persistence of the session entries

pub mod login;
pub mod session_store;

pub use login::{LoginResponse, SessionResolver};
pub use session_store::SessionStore;
