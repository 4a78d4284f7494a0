use crate::number::Number;
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in an expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A number literal, or an already computed intermediate value
    Number(Number),
    /// A binary operator
    Op(Op),
    /// Left bracket `[`
    LBracket,
    /// Right bracket `]`
    RBracket,
}

impl Token {
    /// Get the number carried by this token, if any
    #[must_use]
    pub fn number(&self) -> Option<Number> {
        if let Self::Number(number) = *self {
            Some(number)
        } else {
            None
        }
    }

    /// Get the token for a single non-digit symbol
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '[' => Some(Self::LBracket),
            ']' => Some(Self::RBracket),
            other => Op::from_symbol(other).map(Self::Op),
        }
    }
}

impl From<Number> for Token {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(number) => write!(fmt, "{}", number),
            Self::Op(op) => write!(fmt, "{}", op.symbol()),
            Self::LBracket => write!(fmt, "["),
            Self::RBracket => write!(fmt, "]"),
        }
    }
}

/// Allowed operators in the expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
}

impl Op {
    /// Get the operator for `symbol`
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Get the symbol written for this operator
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Apply the operator to its operands. Returns `None` when dividing by
    /// zero.
    #[must_use]
    pub fn apply(self, left: Number, right: Number) -> Option<Number> {
        match self {
            Self::Plus => Some(left.add(right)),
            Self::Minus => Some(left.sub(right)),
            Self::Mul => Some(left.mul(right)),
            Self::Div => left.div(right),
        }
    }
}
