use std::str::FromStr;

use log::{debug, warn};

use crate::operator::errors::OperatorError;
use crate::operator::ops::Operator;

impl Operator {
    fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Parses a compact list of operator symbols such as `"+-*/"` or `"+, *"`.
    ///
    /// Whitespace and commas are ignored and repeated symbols collapse into one entry,
    /// keeping the order in which they first appear.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is not recognised or no operator is given.
    pub fn parse_set(symbols: &str) -> Result<Vec<Operator>, OperatorError> {
        debug!("Parsing operator set: '{}'", symbols);

        let mut operators = Vec::new();
        for c in symbols.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            let Some(operator) = Operator::from_symbol(c) else {
                warn!("Unknown operator symbol '{}' in '{}'", c, symbols);
                return Err(OperatorError::UnknownSymbol(c.to_string()));
            };
            if !operators.contains(&operator) {
                operators.push(operator);
            }
        }

        if operators.is_empty() {
            warn!("Operator set '{}' is empty", symbols);
            return Err(OperatorError::Empty);
        }

        Ok(operators)
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c)
                .ok_or_else(|| OperatorError::UnknownSymbol(s.to_string())),
            (None, _) => Err(OperatorError::Empty),
            _ => Err(OperatorError::UnknownSymbol(s.to_string())),
        }
    }
}
