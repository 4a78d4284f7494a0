//! Ordering of recognized symbols into an expression.
//!
//! The recognizer finds every symbol separately, with the centre of its
//! bounding box. Reading them from left to right gives the expression.

use crate::error::Error;
use crate::expr::Expr;
use crate::util::{class_for_label, label_for_class};

/// A symbol found by the recognizer, and its horizontal position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognizedSymbol {
    /// The symbol: a digit, an operator or a bracket
    pub label: char,
    /// Horizontal centre of the symbol bounding box
    pub x: f64,
}

impl RecognizedSymbol {
    /// Create a new symbol at position `x`
    #[must_use]
    pub fn new(label: char, x: f64) -> Self {
        Self { label, x }
    }

    /// Create a symbol from a classifier output class. Returns `None` for an
    /// unknown class.
    #[must_use]
    pub fn from_class(class: usize, x: f64) -> Option<Self> {
        label_for_class(class).map(|label| Self::new(label, x))
    }

    /// Get the classifier output class of this symbol, if it has one
    #[must_use]
    pub fn class(&self) -> Option<usize> {
        class_for_label(self.label)
    }
}

/// Order `symbols` from left to right. Symbols at the same position keep
/// their relative order, and symbols without a position (NaN) come last
/// whatever the sign of the NaN.
#[must_use]
pub fn order_symbols(symbols: &[RecognizedSymbol]) -> Vec<char> {
    let mut sorted = symbols.to_vec();
    sorted.sort_by(|a, b| {
        a.x.is_nan()
            .cmp(&b.x.is_nan())
            .then_with(|| a.x.total_cmp(&b.x))
    });
    sorted.into_iter().map(|symbol| symbol.label).collect()
}

/// Build the expression text written by `symbols`
///
/// # Examples
///
/// ```
/// # use handcalc::{form_expression, RecognizedSymbol};
/// let symbols = [
///     RecognizedSymbol::new('5', 80.0),
///     RecognizedSymbol::new('3', 10.0),
///     RecognizedSymbol::new('+', 42.5),
/// ];
/// assert_eq!(form_expression(&symbols), "3+5");
/// ```
#[must_use]
pub fn form_expression(symbols: &[RecognizedSymbol]) -> String {
    order_symbols(symbols).into_iter().collect()
}

/// Order and parse `symbols`
pub fn parse_symbols(symbols: &[RecognizedSymbol]) -> Result<Expr, Error> {
    Expr::from_symbols(&order_symbols(symbols))
}
