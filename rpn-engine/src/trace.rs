use crate::state::State;
use crate::token::{Operator, Token};

/// Receives a report for every token the evaluator accepts.
///
/// The evaluator itself never writes diagnostics; callers that want them pass
/// a sink in.
pub trait Trace {
    fn pushed(&mut self, _value: f64) {}

    fn applied(&mut self, _op: Operator, _result: f64) {}
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn pushed(&mut self, value: f64) {
        (**self).pushed(value)
    }

    fn applied(&mut self, op: Operator, result: f64) {
        (**self).applied(op, result)
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Trace for Silent {}

/// Forwards reports to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn pushed(&mut self, value: f64) {
        log::debug!(target: "rpn", "pushed operand {}", value);
    }

    fn applied(&mut self, op: Operator, result: f64) {
        log::debug!(target: "rpn", "applied '{}' -> {}", op, result);
    }
}

/// Reports the step that produced `state` and returns what `execute` signals
/// for it: nothing for a push, the new top of stack for an operator.
pub fn observe<T: Trace + ?Sized>(trace: &mut T, token: Token, state: &State) -> Option<f64> {
    match token {
        Token::Operand(value) => {
            trace.pushed(value);
            None
        }
        Token::Operator(op) => {
            let result = state.result();
            if let Some(result) = result {
                trace.applied(op, result);
            }
            result
        }
    }
}
