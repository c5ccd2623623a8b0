//! Request guards.
//!
//! - `session` wraps the tower-sessions session with typed accessors
//! - `auth` authenticates the caller and composes the room guard for handlers
//! - `room` captures room references from requests, resolves the caller's role and
//!   gates operations on it

pub mod auth;
pub mod room;
pub mod session;

#[cfg(test)]
mod test;
