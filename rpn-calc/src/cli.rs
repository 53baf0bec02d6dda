use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rpn_engine::{Calculator, Trace};

use crate::backend::{Backend, Functional};

/// Which realization of the evaluator backs the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Mutable calculator object
    #[value(name = "C", alias = "c")]
    Object,
    /// Pure state transitions
    #[value(name = "F", alias = "f")]
    Functional,
}

impl Mode {
    pub fn backend<T: Trace + 'static>(self, trace: T) -> Box<dyn Backend> {
        match self {
            Mode::Object => Box::new(Calculator::with_trace(trace)),
            Mode::Functional => Box::new(Functional::with_trace(trace)),
        }
    }
}

/// Reverse Polish notation calculator.
///
/// Without an expression an interactive session is started: enter one number
/// or operator (+, -, *, /) per line, "clear" to empty the stack and "exit" or
/// "quit" to leave.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Calculator realization: C (object) or F (functional)
    #[arg(short, long, value_enum, default_value_t = Mode::Object)]
    pub mode: Mode,

    /// Evaluate this RPN expression once and exit
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Log level (off, error, warn, info, debug, trace); overrides RPN_LOG
    #[arg(long)]
    pub log_level: Option<LevelFilter>,
}
