use crate::error::CalcError;
use crate::state::State;
use crate::token::{Operator, Token};
use crate::trace::{self, Silent, Trace};

/// Mutable front end over [`State`].
///
/// Holds one state value and swaps it for the successor on every successful
/// call; on error the held state is left alone.
#[derive(Debug, Default)]
pub struct Calculator<T: Trace = Silent> {
    state: State,
    trace: T,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_trace(Silent)
    }
}

impl<T: Trace> Calculator<T> {
    pub fn with_trace(trace: T) -> Self {
        Self {
            state: State::new(),
            trace,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn stack(&self) -> &[f64] {
        self.state.stack()
    }

    pub fn result(&self) -> Option<f64> {
        self.state.result()
    }

    pub fn push_operand(&mut self, value: f64) {
        let next = self.state.push(value);
        self.commit(Token::Operand(value), next);
    }

    pub fn reset(&mut self) {
        self.state = self.state.reset();
    }

    pub fn clear(&mut self) {
        self.reset();
    }

    /// Applies `op` to the two topmost operands and returns the new result.
    pub fn apply(&mut self, op: Operator) -> Result<f64, CalcError> {
        let next = self.state.apply(op)?;
        let result = self.commit(Token::Operator(op), next);
        // A successful binary operation always leaves a value behind.
        Ok(result.unwrap_or_default())
    }

    pub fn add(&mut self) -> Result<f64, CalcError> {
        self.apply(Operator::Add)
    }

    pub fn subtract(&mut self) -> Result<f64, CalcError> {
        self.apply(Operator::Sub)
    }

    pub fn multiply(&mut self) -> Result<f64, CalcError> {
        self.apply(Operator::Mul)
    }

    pub fn divide(&mut self) -> Result<f64, CalcError> {
        self.apply(Operator::Div)
    }

    /// Classifies and applies one token.
    ///
    /// Returns `None` after pushing an operand and the new top of stack after
    /// an operator.
    pub fn execute(&mut self, token: &str) -> Result<Option<f64>, CalcError> {
        let token: Token = token.parse()?;
        let next = self.state.step(token)?;
        Ok(self.commit(token, next))
    }

    /// Starts from an empty stack and executes every whitespace-separated
    /// token of `text`, stopping at the first failure.
    pub fn evaluate(&mut self, text: &str) -> Result<Option<f64>, CalcError> {
        self.reset();
        for token in text.split_whitespace() {
            self.execute(token)?;
        }
        Ok(self.result())
    }

    fn commit(&mut self, token: Token, next: State) -> Option<f64> {
        self.state = next;
        trace::observe(&mut self.trace, token, &self.state)
    }
}
