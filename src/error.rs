use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the handcalc crate
///
/// Both variants carry the text of the offending expression, so that the
/// caller can show it back to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression does not follow the grammar
    MalformedExpression(String),
    /// The expression divides by zero somewhere during evaluation
    DivideByZero(String),
}

impl Error {
    /// Get the expression text this error was raised for
    #[must_use]
    pub fn text(&self) -> &str {
        match *self {
            Self::MalformedExpression(ref text) | Self::DivideByZero(ref text) => text,
        }
    }

    /// Get the same kind of error, reported for another expression text
    #[must_use]
    pub(crate) fn with_text(self, text: &str) -> Self {
        match self {
            Self::MalformedExpression(_) => Self::MalformedExpression(text.into()),
            Self::DivideByZero(_) => Self::DivideByZero(text.into()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::MalformedExpression(ref text) => write!(fmt, "Invalid expression: {}", text),
            Self::DivideByZero(ref text) => write!(fmt, "Divide by 0 error: {}", text),
        }
    }
}

impl error::Error for Error {}
