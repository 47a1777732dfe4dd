//! Request guards and session helpers.
//!
//! `AuthGuard` resolves the logged in character and enforces permission keys and
//! ownership; `AuthSession` reads and writes the login state in the session.

pub mod auth;
pub mod session;
