//! Declarative argument grammars for commands.
//!
//! A command's grammar is the fixed, ordered sequence of terminal-symbol
//! steps its arguments must match, always terminated by an end-of-line
//! step so trailing garbage can never be silently ignored.

/// One parameter-parsing step in a command grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarStep {
    /// A bare word argument.
    Word,
    /// A quoted string argument; quotes are stripped from the value.
    QuotedString,
    /// The `?` operator.
    Question,
    /// A bare word, with end-of-line accepted as a distinguished
    /// alternative (the shape of `help`'s optional argument).
    WordOrEnd,
    /// End of the line. Every grammar finishes with this step.
    End,
}

/// The ordered sequence of steps defining one command's argument shape.
///
/// Registered once per command name and read-only at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGrammar {
    steps: Vec<GrammarStep>,
}

impl CommandGrammar {
    /// Builds a grammar from the given steps, appending the terminating
    /// [`GrammarStep::End`] if the caller left it off.
    pub fn new(steps: impl Into<Vec<GrammarStep>>) -> Self {
        let mut steps = steps.into();
        if steps.last() != Some(&GrammarStep::End) {
            steps.push(GrammarStep::End);
        }
        Self { steps }
    }

    /// A grammar that accepts no arguments at all.
    pub fn empty() -> Self {
        Self::new([])
    }

    /// The steps in parse order. The step count equals the parameter count
    /// of a successful parse (the end-of-line step produces a node too).
    pub fn steps(&self) -> &[GrammarStep] {
        &self.steps
    }
}
