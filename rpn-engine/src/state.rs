use crate::error::CalcError;
use crate::token::{Operator, Token};

/// Immutable evaluator state.
///
/// Every transition borrows the current state and hands back a new one, so a
/// failed transition leaves the caller's state exactly as it was.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct State {
    stack: Vec<f64>,
}

impl State {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The top of the stack, if anything has been pushed.
    pub fn result(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    pub fn push(&self, value: f64) -> State {
        let mut stack = Vec::with_capacity(self.stack.len() + 1);
        stack.extend_from_slice(&self.stack);
        stack.push(value);
        State { stack }
    }

    pub fn reset(&self) -> State {
        State::new()
    }

    /// Replaces the two topmost operands with `a op b`.
    ///
    /// The depth is checked before anything is consumed, and the result is
    /// computed before the new stack is built.
    pub fn apply(&self, op: Operator) -> Result<State, CalcError> {
        let &[.., a, b] = self.stack.as_slice() else {
            return Err(CalcError::InsufficientOperands {
                op,
                depth: self.stack.len(),
            });
        };

        let value = op.apply(a, b)?;

        let mut stack = self.stack[..self.stack.len() - 2].to_vec();
        stack.push(value);
        Ok(State { stack })
    }

    pub fn step(&self, token: Token) -> Result<State, CalcError> {
        match token {
            Token::Operand(value) => Ok(self.push(value)),
            Token::Operator(op) => self.apply(op),
        }
    }

    /// Classifies `token` and applies it.
    pub fn execute(&self, token: &str) -> Result<State, CalcError> {
        self.step(token.parse()?)
    }

    /// Folds every whitespace-separated token of `text` into the state,
    /// stopping at the first token that fails.
    pub fn evaluate(&self, text: &str) -> Result<State, CalcError> {
        text.split_whitespace()
            .try_fold(self.clone(), |state, token| state.execute(token))
    }
}

/// Evaluates `text` from an empty stack and returns the final top of stack.
pub fn evaluate_expression(text: &str) -> Result<Option<f64>, CalcError> {
    Ok(State::new().evaluate(text)?.result())
}
