use std::fmt;

use crate::operator::errors::ArithmeticError;

/// The closed set of binary operators a tree node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in the order the default set uses
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Applies the operator to `a` and `b`, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - dividing by zero
    /// - `a` is not evenly divisible by `b`
    /// - the result does not fit in an `i64`
    pub fn apply(self, a: i64, b: i64) -> Result<i64, ArithmeticError> {
        match self {
            Operator::Add => a.checked_add(b).ok_or(ArithmeticError::Overflow),
            Operator::Subtract => a.checked_sub(b).ok_or(ArithmeticError::Overflow),
            Operator::Multiply => a.checked_mul(b).ok_or(ArithmeticError::Overflow),
            Operator::Divide => {
                if b == 0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                let remainder = a.checked_rem(b).ok_or(ArithmeticError::Overflow)?;
                if remainder != 0 {
                    return Err(ArithmeticError::InexactDivision);
                }
                a.checked_div(b).ok_or(ArithmeticError::Overflow)
            }
        }
    }

    /// Whether swapping the operands leaves the result unchanged
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
