#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]

//! Handcalc, a crate for evaluating handwritten arithmetic expressions.
//!
//! A handwriting recognizer turns a drawing into a left-to-right sequence of
//! symbols. This crate checks that these symbols form a valid expression and
//! computes its value. The easiest way to use this crate is with the
//! [`solve`](fn.solve.html) function:
//!
//! ```
//! assert_eq!(handcalc::solve("3[2+5]"), Ok(21.0));
//! ```
//!
//! Failures are regular outcomes, since the recognizer can misread a symbol.
//! They carry the expression text, ready to be shown to the user:
//!
//! ```
//! use handcalc::{solve, Error};
//!
//! let error = solve("4/[2-2]").unwrap_err();
//! assert_eq!(error, Error::DivideByZero("4/[2-2]".into()));
//! assert_eq!(error.to_string(), "Divide by 0 error: 4/[2-2]");
//!
//! let error = solve("4*/2").unwrap_err();
//! assert_eq!(error.to_string(), "Invalid expression: 4*/2");
//! ```
//!
//! Parsing and evaluation can also be separated with the
//! [`Expr`](struct.Expr.html) type, and symbols coming with their position
//! can be ordered with [`form_expression`](fn.form_expression.html).
//!
//! ```
//! use handcalc::{Expr, Number, RecognizedSymbol, form_expression};
//!
//! let symbols = [
//!     RecognizedSymbol::new('2', 120.0),
//!     RecognizedSymbol::new('-', 10.0),
//!     RecognizedSymbol::new('/', 70.0),
//!     RecognizedSymbol::new('7', 35.0),
//! ];
//! let text = form_expression(&symbols);
//! assert_eq!(text, "-7/2");
//!
//! let expr = Expr::parse(&text).unwrap();
//! assert_eq!(expr.eval(), Ok(Number::Real(-3.5)));
//! ```
//!
//! # Language definition
//!
//! Expressions only contain the following symbols:
//!
//! - digits `0` to `9`. Consecutive digits form an integer;
//! - operators `+`, `-`, `*` and `/`;
//! - brackets `[` and `]`, used as parenthesis.
//!
//! A `-` is the sign of a number when it is followed by a digit or a `[`,
//! and is not preceded by a digit, a `]` or another `-`. Every other `-` is a
//! subtraction. A number written next to a bracket is multiplied with it:
//! `3[5]`, `[5]3` and `-[5]` are `15`, `15` and `-5`.
//!
//! Brackets are evaluated first, then `*` and `/`, then `+` and `-`, from left
//! to right. Integer computations are exact, divisions always produce real
//! numbers.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod lexer;
mod number;
mod sequence;
mod token;
mod util;
pub mod validator;

pub use error::Error;
pub use expr::{evaluate, render_outcome, report, solve, Expr, DEFAULT_PRECISION};
pub use lexer::{tokenize, Lexer};
pub use number::Number;
pub use sequence::{form_expression, order_symbols, parse_symbols, RecognizedSymbol};
pub use token::{Op, Token};
pub use util::{class_for_label, label_for_class, CLASS_LABELS};
pub use validator::validate;
