//! `coach-core` — domain logic for the Responsible AI coach.
//!
//! Everything here is synchronous; the HTTP façade wraps calls in
//! `spawn_blocking`. The only stateful piece is [`session::Session`], which
//! drives one chat through description → intake answers → report.

pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod scaffold;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{CoachError, Result};
