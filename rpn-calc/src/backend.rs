use rpn_engine::trace::observe;
use rpn_engine::{CalcError, Calculator, State, Token, Trace};

/// Mode-agnostic view of an evaluator, used by the session and batch runners.
pub trait Backend {
    fn mode_name(&self) -> &'static str;

    fn result(&self) -> Option<f64>;

    fn execute(&mut self, token: &str) -> Result<Option<f64>, CalcError>;

    fn reset(&mut self);

    /// Evaluates a whole expression from an empty stack, stopping at the
    /// first failing token.
    fn evaluate(&mut self, text: &str) -> Result<Option<f64>, CalcError> {
        self.reset();
        for token in text.split_whitespace() {
            self.execute(token)?;
        }
        Ok(self.result())
    }
}

impl<T: Trace> Backend for Calculator<T> {
    fn mode_name(&self) -> &'static str {
        "object (C)"
    }

    fn result(&self) -> Option<f64> {
        Calculator::result(self)
    }

    fn execute(&mut self, token: &str) -> Result<Option<f64>, CalcError> {
        Calculator::execute(self, token)
    }

    fn reset(&mut self) {
        Calculator::reset(self)
    }

    fn evaluate(&mut self, text: &str) -> Result<Option<f64>, CalcError> {
        Calculator::evaluate(self, text)
    }
}

/// Drives [`State`] directly, reassigning it after every transition.
#[derive(Debug, Default)]
pub struct Functional<T: Trace> {
    state: State,
    trace: T,
}

impl<T: Trace> Functional<T> {
    pub fn with_trace(trace: T) -> Self {
        Self {
            state: State::new(),
            trace,
        }
    }
}

impl<T: Trace> Backend for Functional<T> {
    fn mode_name(&self) -> &'static str {
        "functional (F)"
    }

    fn result(&self) -> Option<f64> {
        self.state.result()
    }

    fn execute(&mut self, token: &str) -> Result<Option<f64>, CalcError> {
        let token: Token = token.parse()?;
        self.state = self.state.step(token)?;
        Ok(observe(&mut self.trace, token, &self.state))
    }

    fn reset(&mut self) {
        self.state = self.state.reset();
    }
}
