use crate::error::Error;
use crate::number::Number;
use crate::token::Token;
use crate::validator::{is_number_part, validate};

/// Split `input` into tokens.
///
/// Consecutive digits, with their sign if any, are merged into a single
/// [`Token::Number`].
///
/// # Examples
///
/// ```
/// # use handcalc::{tokenize, Number, Op, Token};
/// assert_eq!(
///     tokenize("12*-3"),
///     Ok(vec![
///         Token::Number(Number::Integer(12)),
///         Token::Op(Op::Mul),
///         Token::Number(Number::Integer(-3)),
///     ])
/// );
/// assert!(tokenize("12*").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(input).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a lexer for the symbols of `input`
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::from_symbols(input.chars().collect())
    }

    /// Create a lexer for an already split sequence of symbols
    #[must_use]
    pub fn from_symbols(input: Vec<char>) -> Self {
        Self { input, position: 0 }
    }

    /// Get the symbols this lexer reads
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.input
    }

    /// Validate the input, then produce the full list of tokens
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        if !validate(&self.input) {
            return Err(self.malformed());
        }

        let mut output = Vec::new();
        while let Some(token) = self.next_token()? {
            output.push(token);
        }
        log::trace!("tokenized '{}' into {} tokens", self.text(), output.len());
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let c = match self.input.get(self.position) {
            Some(&c) => c,
            None => return Ok(None),
        };

        if is_number_part(&self.input, self.position) {
            let start = self.position;
            while is_number_part(&self.input, self.position) {
                self.position += 1;
            }
            let literal: String = self.input[start..self.position].iter().collect();
            return Number::parse(&literal)
                .map(|number| Some(Token::Number(number)))
                .ok_or_else(|| self.malformed());
        }

        self.position += 1;
        Token::from_symbol(c)
            .map(Some)
            .ok_or_else(|| self.malformed())
    }

    fn text(&self) -> String {
        self.input.iter().collect()
    }

    fn malformed(&self) -> Error {
        Error::MalformedExpression(self.text())
    }
}
