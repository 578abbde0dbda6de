//! Command handlers and the context they execute against.
//!
//! Handlers are plain functions: they receive the execution event and a
//! borrowed capability bundle, and they are the only place side effects
//! happen. The core never touches rendering or persistence itself.

pub mod session;
pub mod system;

use crate::commands::registry::CommandRegistry;
use crate::output::OutputSink;
use crate::session::SessionState;

/// Capability bundle supplied by the caller for one execution.
///
/// The sink and session state are the external collaborators commands act
/// on; the registry reference is read-only and exists so `help` can
/// enumerate the command table.
pub struct ExecutionContext<'a> {
    /// Output sink receiving command output and reported errors.
    pub sink: &'a mut dyn OutputSink,
    /// Mutable session state (current user, working directory, echo flag).
    pub session: &'a mut SessionState,
    /// The registry the command was resolved from.
    pub registry: &'a CommandRegistry,
}
