//! Session authentication: the context provider and the auth mutations.

pub mod context;
pub mod mutations;

pub use context::{AuthProvider, AuthSession, use_auth_session};
