//! Session command handlers (`user`).

use super::ExecutionContext;
use crate::commands::command::{CommandExecutionEvent, ParameterNode, ValidationError};

/// Handles `user "<name>"`: sets the active user for the session.
pub fn user(
    event: &CommandExecutionEvent<'_>,
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ValidationError> {
    if let Some(ParameterNode::StringLiteral(name)) = event.parameter(0) {
        if name.is_empty() {
            return Err(ValidationError::new(
                "First argument of user cannot be an empty string",
            ));
        }
        if ctx.session.user != *name {
            ctx.session.user = name.clone();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandRegistry;
    use crate::output::MemorySink;
    use crate::session::SessionState;

    #[test]
    fn test_user_updates_session() {
        let registry = CommandRegistry::with_builtins();
        let mut session = SessionState::default();
        let mut sink = MemorySink::new();

        let parameters = [
            ParameterNode::StringLiteral("alice".to_string()),
            ParameterNode::EndOfLine,
        ];
        let event = CommandExecutionEvent::new(&parameters);
        let mut ctx = ExecutionContext {
            sink: &mut sink,
            session: &mut session,
            registry: &registry,
        };
        user(&event, &mut ctx).unwrap();

        assert_eq!(session.user, "alice");
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_user_rejects_empty_name() {
        let registry = CommandRegistry::with_builtins();
        let mut session = SessionState::default();
        let original_user = session.user.clone();
        let mut sink = MemorySink::new();

        let parameters = [
            ParameterNode::StringLiteral(String::new()),
            ParameterNode::EndOfLine,
        ];
        let event = CommandExecutionEvent::new(&parameters);
        let mut ctx = ExecutionContext {
            sink: &mut sink,
            session: &mut session,
            registry: &registry,
        };
        let err = user(&event, &mut ctx).unwrap_err();

        assert_eq!(
            err.to_string(),
            "First argument of user cannot be an empty string"
        );
        assert_eq!(session.user, original_user);
    }
}
