//! Grammar checks for expressions, working directly on the sequence of
//! symbols coming out of the recognizer.
//!
//! An expression is valid when it is non-empty, only uses the symbols
//! `0-9 + - * / [ ]`, has balanced and non-empty brackets, opens every
//! bracket on a number or another bracket, and places every operator
//! between two operands.

/// Check if `c` is one of the symbols the recognizer can produce
#[must_use]
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_digit() || is_operator(c) || c == '[' || c == ']'
}

/// Check if `c` is an operator symbol
#[must_use]
pub fn is_operator(c: char) -> bool {
    c == '+' || c == '-' || c == '*' || c == '/'
}

/// Check if `expr[i]` is a `-` acting as the sign of a number, instead of a
/// subtraction.
///
/// A sign must be followed by a digit or a `[`, and must not come after an
/// operand (a digit or a `]`) or after another `-`.
///
/// # Examples
///
/// ```
/// # use handcalc::validator::is_leading_sign;
/// let expr: Vec<char> = "-3-[-4]".chars().collect();
/// assert!(is_leading_sign(&expr, 0));
/// assert!(!is_leading_sign(&expr, 2));
/// assert!(is_leading_sign(&expr, 4));
/// ```
#[must_use]
pub fn is_leading_sign(expr: &[char], i: usize) -> bool {
    if expr.get(i) != Some(&'-') {
        return false;
    }

    let starts_operand = expr
        .get(i + 1)
        .map_or(false, |&next| next.is_ascii_digit() || next == '[');
    if !starts_operand {
        return false;
    }

    match i.checked_sub(1).map(|previous| expr[previous]) {
        None => true,
        Some(previous) => !(previous.is_ascii_digit() || previous == ']' || previous == '-'),
    }
}

/// Check if `expr[i]` is part of a number literal: a digit or a sign
#[must_use]
pub fn is_number_part(expr: &[char], i: usize) -> bool {
    expr.get(i).map_or(false, char::is_ascii_digit) || is_leading_sign(expr, i)
}

/// Check if `expr` is a valid expression
///
/// # Examples
///
/// ```
/// # use handcalc::validator::validate;
/// let valid: Vec<char> = "3[5-2]".chars().collect();
/// assert!(validate(&valid));
///
/// let invalid: Vec<char> = "3+".chars().collect();
/// assert!(!validate(&invalid));
/// ```
#[must_use]
pub fn validate(expr: &[char]) -> bool {
    let checks: [(&str, fn(&[char]) -> bool); 5] = [
        ("non-empty", |expr| !expr.is_empty()),
        ("alphabet", check_symbols),
        ("bracket balance", check_brackets),
        ("bracket content", check_bracket_openings),
        ("operator placement", check_operators),
    ];

    for (rule, check) in &checks {
        if !check(expr) {
            log::debug!(
                "rejected '{}': {} rule failed",
                expr.iter().collect::<String>(),
                rule
            );
            return false;
        }
    }
    return true;
}

fn check_symbols(expr: &[char]) -> bool {
    expr.iter().all(|&c| is_symbol(c))
}

/// Brackets never close more than they opened, all of them are closed at
/// the end, and `[]` never appears.
fn check_brackets(expr: &[char]) -> bool {
    let mut depth = 0_usize;
    let mut previous = None;
    for &c in expr {
        match c {
            '[' => depth += 1,
            ']' => {
                if previous == Some('[') {
                    return false;
                }
                depth = match depth.checked_sub(1) {
                    Some(depth) => depth,
                    None => return false,
                };
            }
            _ => {}
        }
        previous = Some(c);
    }
    depth == 0
}

/// A `[` must be followed by a digit, another `[`, or a sign
fn check_bracket_openings(expr: &[char]) -> bool {
    (0..expr.len()).filter(|&i| expr[i] == '[').all(|i| {
        expr.get(i + 1)
            .map_or(false, |&next| next.is_ascii_digit() || next == '[')
            || is_leading_sign(expr, i + 1)
    })
}

/// Operators need an operand on both sides: a digit or `]` before, and a
/// digit, a sign or `[` after.
fn check_operators(expr: &[char]) -> bool {
    let last = expr.len().saturating_sub(1);
    for (i, &c) in expr.iter().enumerate() {
        if !is_operator(c) || is_leading_sign(expr, i) {
            continue;
        }
        if i == 0 || i == last {
            return false;
        }

        let previous = expr[i - 1];
        if !(previous.is_ascii_digit() || previous == ']') {
            return false;
        }
        if !(expr[i + 1] == '[' || is_number_part(expr, i + 1)) {
            return false;
        }
    }
    return true;
}
