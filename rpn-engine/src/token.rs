use std::str::FromStr;

use crate::error::CalcError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Computes `a op b`, where `b` is the most recently pushed operand.
    ///
    /// # Arguments
    ///
    /// * `a` - The deeper operand.
    /// * `b` - The operand that was on top of the stack.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div if b == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Div => Ok(a / b),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single unit of RPN input.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Operand(f64),
    Operator(Operator),
}

/// Numeric literals start with an optional sign followed by a digit or a dot,
/// which keeps words like `inf` and `NaN` out even though `f64` accepts them.
fn parse_literal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    match unsigned.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => text.parse().ok(),
        _ => None,
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim();

        if let Some(value) = parse_literal(text) {
            return Ok(Token::Operand(value));
        }

        Operator::from_symbol(text)
            .map(Token::Operator)
            .ok_or_else(|| CalcError::UnsupportedOperator(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_literals() {
        assert_eq!("3".parse::<Token>().unwrap(), Token::Operand(3.0));
        assert_eq!("-2.5".parse::<Token>().unwrap(), Token::Operand(-2.5));
        assert_eq!("+7".parse::<Token>().unwrap(), Token::Operand(7.0));
        assert_eq!(".5".parse::<Token>().unwrap(), Token::Operand(0.5));
        assert_eq!("1e3".parse::<Token>().unwrap(), Token::Operand(1000.0));
        assert_eq!("  42 \t".parse::<Token>().unwrap(), Token::Operand(42.0));
    }

    #[test]
    fn test_token_operators() {
        assert_eq!("+".parse::<Token>().unwrap(), Token::Operator(Operator::Add));
        assert_eq!(" - ".parse::<Token>().unwrap(), Token::Operator(Operator::Sub));
        assert_eq!("*".parse::<Token>().unwrap(), Token::Operator(Operator::Mul));
        assert_eq!("/".parse::<Token>().unwrap(), Token::Operator(Operator::Div));
    }

    #[test]
    fn test_token_unsupported() {
        assert_eq!(
            "%".parse::<Token>().unwrap_err(),
            CalcError::UnsupportedOperator("%".to_string())
        );
        assert_eq!(
            "inf".parse::<Token>().unwrap_err(),
            CalcError::UnsupportedOperator("inf".to_string())
        );
        assert_eq!(
            "NaN".parse::<Token>().unwrap_err(),
            CalcError::UnsupportedOperator("NaN".to_string())
        );
        assert_eq!(
            "".parse::<Token>().unwrap_err(),
            CalcError::UnsupportedOperator(String::new())
        );
        assert_eq!(
            "1.2.3".parse::<Token>().unwrap_err(),
            CalcError::UnsupportedOperator("1.2.3".to_string())
        );
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0).unwrap(), 8.0);
        assert_eq!(Operator::Sub.apply(5.0, 3.0).unwrap(), 2.0);
        assert_eq!(Operator::Mul.apply(5.0, 3.0).unwrap(), 15.0);
        assert_eq!(Operator::Div.apply(6.0, 3.0).unwrap(), 2.0);
        assert_eq!(
            Operator::Div.apply(6.0, 0.0).unwrap_err(),
            CalcError::DivisionByZero
        );
        assert_eq!(
            Operator::Div.apply(0.0, -0.0).unwrap_err(),
            CalcError::DivisionByZero
        );
    }

    #[test]
    fn test_operator_symbols() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            let symbol = op.to_string();
            assert_eq!(Operator::from_symbol(&symbol), Some(op));
        }
        assert_eq!(Operator::from_symbol("^"), None);
    }
}
