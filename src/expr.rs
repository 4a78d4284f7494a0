use crate::error::Error;
use crate::lexer::Lexer;
use crate::number::Number;
use crate::token::{Op, Token};

/// Default number of decimal places for real values in [`report`]
pub const DEFAULT_PRECISION: u32 = 4;

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// the expression is malformed or divides by zero.
///
/// # Example
///
/// ```
/// # use handcalc::{solve, Error};
/// assert_eq!(solve("2+3*4"), Ok(14.0));
/// assert_eq!(solve("3[5]"), Ok(15.0));
/// assert_eq!(solve("5/0"), Err(Error::DivideByZero("5/0".into())));
/// assert_eq!(solve("3+"), Err(Error::MalformedExpression("3+".into())));
/// ```
pub fn solve(input: &str) -> Result<f64, Error> {
    Expr::parse(input)
        .and_then(|expr| expr.eval())
        .map(f64::from)
}

/// Evaluate `input` and render the outcome for display: `<input> = <value>`
/// with real values rounded to `precision` decimal places, or the error
/// message.
///
/// # Example
///
/// ```
/// # use handcalc::report;
/// assert_eq!(report("2/3", 4), "2/3 = 0.6667");
/// assert_eq!(report("[2+3]*4", 4), "[2+3]*4 = 20");
/// assert_eq!(report("5/0", 4), "Divide by 0 error: 5/0");
/// assert_eq!(report("3]", 4), "Invalid expression: 3]");
/// assert_eq!(report("4/2", 4), "4/2 = 2.0");
/// ```
#[must_use]
pub fn report(input: &str, precision: u32) -> String {
    let outcome = Expr::parse(input).and_then(|expr| expr.eval());
    render_outcome(input, &outcome, precision)
}

/// Render an already computed outcome of `input` the same way as
/// [`report`].
///
/// # Example
///
/// ```
/// # use handcalc::{render_outcome, Error, Number};
/// assert_eq!(render_outcome("7/2", &Ok(Number::Real(3.5)), 4), "7/2 = 3.5");
/// let error = Err(Error::MalformedExpression("7/".into()));
/// assert_eq!(render_outcome("7/", &error, 4), "Invalid expression: 7/");
/// ```
#[must_use]
pub fn render_outcome(input: &str, outcome: &Result<Number, Error>, precision: u32) -> String {
    match outcome {
        Ok(value) => format!("{} = {}", input, value.rounded(precision)),
        Err(error) => error.to_string(),
    }
}

/// Reduce a token sequence to its value.
///
/// Brackets are solved first, leftmost first, then `*` and `/`, then `+` and
/// `-`, left to right. A number written right next to a bracket is
/// multiplied with it.
///
/// Errors carry the tokens written back as text. Use [`Expr`] to get errors
/// reporting the original input instead.
///
/// # Example
///
/// ```
/// # use handcalc::{evaluate, tokenize, Number};
/// let tokens = tokenize("-[-3]").unwrap();
/// assert_eq!(evaluate(&tokens), Ok(Number::Integer(3)));
/// ```
pub fn evaluate(tokens: &[Token]) -> Result<Number, Error> {
    reduce(tokens.to_vec()).map_err(|fault| {
        let text: String = tokens.iter().map(ToString::to_string).collect();
        match fault {
            Fault::ZeroDivisor => Error::DivideByZero(text),
            Fault::Shape => Error::MalformedExpression(text),
        }
    })
}

/// Reasons for a reduction to stop
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fault {
    /// A `/` has a zero right operand
    ZeroDivisor,
    /// The tokens are not laid out as an expression
    Shape,
}

/// Each step of the loop strictly shrinks `tokens`. Only bracket contents are
/// reduced recursively, so the recursion depth is the bracket nesting depth.
fn reduce(mut tokens: Vec<Token>) -> Result<Number, Fault> {
    loop {
        log::trace!("reducing {}", TokenText(&tokens));

        if tokens.len() == 1 {
            return tokens[0].number().ok_or(Fault::Shape);
        }
        if tokens.is_empty() {
            return Err(Fault::Shape);
        }

        if let Some(open) = tokens.iter().position(|token| *token == Token::LBracket) {
            let close = matching_bracket(&tokens, open).ok_or(Fault::Shape)?;
            let value = reduce(tokens[open + 1..close].to_vec())?;
            tokens = splice_bracket(&tokens, open, close, value);
            continue;
        }

        let operator = find_operator(&tokens, Op::Mul.precedence())
            .or_else(|| find_operator(&tokens, Op::Plus.precedence()));
        match operator {
            Some((i, op)) => apply_at(&mut tokens, i, op)?,
            None => return Err(Fault::Shape),
        }
    }
}

/// Find the `]` closing the `[` at `open`
fn matching_bracket(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0_usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match *token {
            Token::LBracket => depth += 1,
            Token::RBracket => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Replace `tokens[open..=close]` with `value`, adding a `*` on each side
/// where a number touches the bracket.
fn splice_bracket(tokens: &[Token], open: usize, close: usize, value: Number) -> Vec<Token> {
    let before = &tokens[..open];
    let after = &tokens[close + 1..];

    let mut spliced = Vec::with_capacity(tokens.len());
    spliced.extend_from_slice(before);
    if before.last().and_then(Token::number).is_some() {
        spliced.push(Token::Op(Op::Mul));
    }
    spliced.push(Token::Number(value));
    if after.first().and_then(Token::number).is_some() {
        spliced.push(Token::Op(Op::Mul));
    }
    spliced.extend_from_slice(after);
    spliced
}

/// Find the leftmost operator with the given `precedence`
fn find_operator(tokens: &[Token], precedence: u8) -> Option<(usize, Op)> {
    tokens.iter().enumerate().find_map(|(i, token)| match *token {
        Token::Op(op) if op.precedence() == precedence => Some((i, op)),
        _ => None,
    })
}

/// Replace `tokens[i - 1..=i + 1]` with the result of `op`
fn apply_at(tokens: &mut Vec<Token>, i: usize, op: Op) -> Result<(), Fault> {
    let left = i
        .checked_sub(1)
        .and_then(|left| tokens.get(left))
        .and_then(Token::number)
        .ok_or(Fault::Shape)?;
    let right = tokens
        .get(i + 1)
        .and_then(Token::number)
        .ok_or(Fault::Shape)?;

    let value = op.apply(left, right).ok_or(Fault::ZeroDivisor)?;
    tokens.splice(i - 1..=i + 1, std::iter::once(Token::Number(value)));
    Ok(())
}

/// Lazy formatting of a token sequence, for logs
struct TokenText<'a>(&'a [Token]);

impl std::fmt::Display for TokenText<'_> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        for token in self.0 {
            write!(fmt, "{}", token)?;
        }
        Ok(())
    }
}

/// A validated and tokenized expression.
///
/// # Examples
/// ```
/// # use handcalc::{Expr, Number};
/// let expr = Expr::parse("[5]3").unwrap();
/// assert_eq!(expr.source(), "[5]3");
/// assert_eq!(expr.tokens().len(), 4);
/// assert_eq!(expr.eval(), Ok(Number::Integer(15)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    source: String,
    tokens: Vec<Token>,
}

impl Expr {
    /// Parse the given `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use handcalc::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3-[-5]").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3--5").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = Lexer::new(expression).tokenize()?;
        Ok(Self {
            source: expression.into(),
            tokens,
        })
    }

    /// Parse an expression from the symbols produced by the recognizer
    pub fn from_symbols(symbols: &[char]) -> Result<Self, Error> {
        let tokens = Lexer::from_symbols(symbols.to_vec()).tokenize()?;
        Ok(Self {
            source: symbols.iter().collect(),
            tokens,
        })
    }

    /// Get the text this expression was parsed from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the tokens of this expression
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Evaluate the expression. Errors report the original text.
    pub fn eval(&self) -> Result<Number, Error> {
        evaluate(&self.tokens).map_err(|error| error.with_text(&self.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use test_case::test_case;

    #[test_case("5" => Ok(5.0) ; "single number")]
    #[test_case("-5" => Ok(-5.0) ; "negative number")]
    #[test_case("3-5" => Ok(-2.0) ; "subtraction")]
    #[test_case("3-[-5]" => Ok(8.0) ; "subtraction of negative bracket")]
    #[test_case("3*-5" => Ok(-15.0) ; "negative factor")]
    #[test_case("3[5]" => Ok(15.0) ; "implicit multiplication before bracket")]
    #[test_case("[5]3" => Ok(15.0) ; "implicit multiplication after bracket")]
    #[test_case("-[-3]" => Ok(3.0) ; "double negation")]
    #[test_case("-[2+3]" => Ok(-5.0) ; "negated bracket")]
    #[test_case("2[3]4" => Ok(24.0) ; "implicit multiplication both sides")]
    #[test_case("[2][3]" => Ok(6.0) ; "adjacent brackets")]
    #[test_case("2+3*4" => Ok(14.0) ; "multiplication first")]
    #[test_case("2*3+4" => Ok(10.0) ; "multiplication first on the left")]
    #[test_case("[2+3]*4" => Ok(20.0) ; "brackets first")]
    #[test_case("10-4-3" => Ok(3.0) ; "subtraction is left associative")]
    #[test_case("16/4/2" => Ok(2.0) ; "division is left associative")]
    #[test_case("7/2" => Ok(3.5) ; "division is real")]
    #[test_case("1/3*3" => Ok(1.0) ; "real values carry on")]
    #[test_case("[[1+2]*[3+4]]-1" => Ok(20.0) ; "nested brackets")]
    #[test_case("2[3[4]]" => Ok(24.0) ; "nested implicit multiplication")]
    #[test_case("[1+[2*[3-[4/2]]]]" => Ok(3.0) ; "deep nesting")]
    #[test_case("5/0" => Err(Error::DivideByZero("5/0".into())) ; "division by zero")]
    #[test_case("5/[2-2]" => Err(Error::DivideByZero("5/[2-2]".into())) ; "division by computed zero")]
    #[test_case("0/5" => Ok(0.0) ; "zero dividend")]
    #[test_case("3--5" => Err(Error::MalformedExpression("3--5".into())) ; "double minus")]
    #[test_case("[]" => Err(Error::MalformedExpression("[]".into())) ; "empty brackets")]
    #[test_case("[3" => Err(Error::MalformedExpression("[3".into())) ; "unclosed bracket")]
    #[test_case("3]" => Err(Error::MalformedExpression("3]".into())) ; "unopened bracket")]
    #[test_case("" => Err(Error::MalformedExpression(String::new())) ; "empty")]
    #[test_case("+3" => Err(Error::MalformedExpression("+3".into())) ; "leading operator")]
    #[test_case("3+" => Err(Error::MalformedExpression("3+".into())) ; "trailing operator")]
    fn solve(input: &str) -> Result<f64, Error> {
        super::solve(input)
    }

    #[test]
    fn integers_stay_exact() {
        let expr = Expr::parse("9007199254740993-1").unwrap();
        assert!(matches!(expr.eval(), Ok(Number::Integer(9_007_199_254_740_992))));
    }

    #[test]
    fn division_by_zero_inside_brackets_reports_the_whole_input() {
        let expr = Expr::parse("1+[4/0]").unwrap();
        assert_eq!(expr.eval(), Err(Error::DivideByZero("1+[4/0]".into())));
    }

    #[test]
    fn evaluate_reports_tokens() {
        let tokens = tokenize("2*[1/0]").unwrap();
        assert_eq!(
            evaluate(&tokens),
            Err(Error::DivideByZero("2*[1/0]".into()))
        );
    }

    #[test]
    fn malformed_tokens_are_errors() {
        let one = Token::Number(Number::Integer(1));
        let two = Token::Number(Number::Integer(2));
        let cases: [&[Token]; 6] = [
            &[],
            &[Token::Op(Op::Plus)],
            &[one, Token::Op(Op::Plus)],
            &[one, two],
            &[Token::LBracket, one],
            &[Token::LBracket, Token::RBracket],
        ];
        for tokens in &cases {
            assert!(
                matches!(evaluate(tokens), Err(Error::MalformedExpression(_))),
                "{:?}",
                tokens
            );
        }
    }

    #[test]
    fn splice_adds_implicit_multiplication() {
        let tokens = tokenize("2[3]4").unwrap();
        let spliced = splice_bracket(&tokens, 1, 3, Number::Integer(3));
        let text: String = spliced.iter().map(ToString::to_string).collect();
        assert_eq!(text, "2*3*4");

        let tokens = tokenize("2+[3]-4").unwrap();
        let spliced = splice_bracket(&tokens, 2, 4, Number::Integer(3));
        let text: String = spliced.iter().map(ToString::to_string).collect();
        assert_eq!(text, "2+3-4");
    }

    #[test]
    fn matching_bracket_skips_nested_pairs() {
        let tokens = tokenize("[[1]+[2]]3").unwrap();
        assert_eq!(matching_bracket(&tokens, 0), Some(8));
        assert_eq!(matching_bracket(&tokens, 1), Some(3));
    }

    #[test]
    fn from_symbols() {
        let expr = Expr::from_symbols(&['4', '[', '2', ']']).unwrap();
        assert_eq!(expr.source(), "4[2]");
        assert_eq!(expr.eval(), Ok(Number::Integer(8)));
    }

    #[test_case("2/3", 4 => "2/3 = 0.6667" ; "real result")]
    #[test_case("2/3", 2 => "2/3 = 0.67" ; "custom precision")]
    #[test_case("3[5]", 4 => "3[5] = 15" ; "integer result")]
    #[test_case("4/2", 4 => "4/2 = 2.0" ; "whole real result")]
    #[test_case("5/0", 4 => "Divide by 0 error: 5/0" ; "division by zero")]
    #[test_case("[]", 4 => "Invalid expression: []" ; "malformed")]
    fn report(input: &str, precision: u32) -> String {
        super::report(input, precision)
    }
}
