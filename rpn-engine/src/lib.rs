//! Stack-based evaluator for reverse Polish notation arithmetic.
//!
//! [`State`] is the pure transition value; [`Calculator`] is a mutable front
//! end that holds one `State` and reassigns it.

pub mod calculator;
pub mod error;
pub mod state;
pub mod token;
pub mod trace;

pub use calculator::Calculator;
pub use error::CalcError;
pub use state::{evaluate_expression, State};
pub use token::{Operator, Token};
pub use trace::{LogTrace, Silent, Trace};
