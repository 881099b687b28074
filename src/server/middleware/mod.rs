//! Request-scoped authentication helpers.
//!
//! `session` wraps the tower-sessions `Session` with typed accessors for the login
//! state, and `auth` builds the per-handler authorization check on top of it.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
