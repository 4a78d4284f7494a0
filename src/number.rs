use std::fmt::{self, Display, Formatter};

/// A numeric value produced while evaluating an expression.
///
/// Integer literals stay exact as long as possible. Any division, or any
/// integer operation overflowing `i64`, moves the computation to `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An exact integer value
    Integer(i64),
    /// A real value, obtained after a division or an overflow
    Real(f64),
}

impl Number {
    /// Parse an integer literal made of an optional leading `-` and decimal
    /// digits. A literal too large for `i64` is read as a real value.
    ///
    /// A lone `-` is the literal `-1`: it only appears in front of a bracket,
    /// where it negates the bracket content.
    ///
    /// # Examples
    ///
    /// ```
    /// # use handcalc::Number;
    /// assert_eq!(Number::parse("-12"), Some(Number::Integer(-12)));
    /// assert_eq!(Number::parse("-"), Some(Number::Integer(-1)));
    /// assert_eq!(Number::parse("1+2"), None);
    /// ```
    #[must_use]
    pub fn parse(literal: &str) -> Option<Self> {
        let digits = literal.strip_prefix('-').unwrap_or(literal);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if digits.is_empty() {
            return if literal.is_empty() {
                None
            } else {
                Some(Self::Integer(-1))
            };
        }

        if let Ok(value) = literal.parse::<i64>() {
            Some(Self::Integer(value))
        } else {
            literal.parse::<f64>().ok().map(Self::Real)
        }
    }

    /// Get this number as a floating point value
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    /// Check if this number is zero, either as an integer or as a real
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(value) => value == 0,
            Self::Real(value) => value == 0.0,
        }
    }

    /// Round this number to `digits` decimal places. Integers are unchanged.
    #[must_use]
    pub fn rounded(self, digits: u32) -> Self {
        match self {
            Self::Integer(_) => self,
            Self::Real(value) => {
                let scale = libm::pow(10.0, f64::from(digits));
                let rounded = libm::round(value * scale) / scale;
                if rounded.is_finite() {
                    Self::Real(rounded)
                } else {
                    self
                }
            }
        }
    }

    pub(crate) fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_add(right)
                .map_or_else(|| Self::Real(self.value() + other.value()), Self::Integer),
            _ => Self::Real(self.value() + other.value()),
        }
    }

    pub(crate) fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_sub(right)
                .map_or_else(|| Self::Real(self.value() - other.value()), Self::Integer),
            _ => Self::Real(self.value() - other.value()),
        }
    }

    pub(crate) fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_mul(right)
                .map_or_else(|| Self::Real(self.value() * other.value()), Self::Integer),
            _ => Self::Real(self.value() * other.value()),
        }
    }

    /// Real division. `None` if `other` is zero.
    pub(crate) fn div(self, other: Self) -> Option<Self> {
        if other.is_zero() {
            None
        } else {
            Some(Self::Real(self.value() / other.value()))
        }
    }
}

impl PartialEq<Self> for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            _ => self.value() == other.value(),
        }
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> f64 {
        number.value()
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl Display for Number {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Integer(value) => write!(fmt, "{}", value),
            Self::Real(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(fmt, "{:.1}", value)
            }
            Self::Real(value) => write!(fmt, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Number;
    use test_case::test_case;

    #[test_case("0" => Some(Number::Integer(0)) ; "zero")]
    #[test_case("007" => Some(Number::Integer(7)) ; "leading zeros")]
    #[test_case("-5" => Some(Number::Integer(-5)) ; "negative")]
    #[test_case("-" => Some(Number::Integer(-1)) ; "lone sign")]
    #[test_case("" => None ; "empty")]
    #[test_case("--5" => None ; "double sign")]
    #[test_case("5-" => None ; "trailing sign")]
    #[test_case("99999999999999999999" => Some(Number::Real(1e20)) ; "overflowing literal")]
    fn parse(literal: &str) -> Option<Number> {
        Number::parse(literal)
    }

    #[test]
    fn integer_arithmetic_is_exact() {
        let a = Number::Integer(7);
        let b = Number::Integer(-3);
        assert!(matches!(a.add(b), Number::Integer(4)));
        assert!(matches!(a.sub(b), Number::Integer(10)));
        assert!(matches!(a.mul(b), Number::Integer(-21)));
    }

    #[test]
    fn division_is_real() {
        assert!(matches!(Number::Integer(6).div(Number::Integer(3)), Some(Number::Real(_))));
        assert_eq!(Number::Integer(7).div(Number::Integer(2)), Some(Number::Real(3.5)));
        assert_eq!(Number::Integer(7).div(Number::Integer(0)), None);
        assert_eq!(Number::Integer(7).div(Number::Real(0.0)), None);
    }

    #[test]
    fn overflow_moves_to_real() {
        let max = Number::Integer(i64::MAX);
        assert!(matches!(max.add(Number::Integer(1)), Number::Real(_)));
        assert!(matches!(max.mul(Number::Integer(2)), Number::Real(_)));
        assert!(matches!(Number::Integer(i64::MIN).sub(Number::Integer(1)), Number::Real(_)));
    }

    #[test]
    fn equality_compares_values() {
        assert_eq!(Number::Integer(2), Number::Real(2.0));
        assert_ne!(Number::Integer(2), Number::Real(2.5));
    }

    #[test_case(Number::Real(2.0 / 3.0), 4 => "0.6667" ; "real")]
    #[test_case(Number::Real(1.23456), 2 => "1.23" ; "two digits")]
    #[test_case(Number::Real(2.5), 0 => "3.0" ; "no digits")]
    #[test_case(Number::Real(2.0), 4 => "2.0" ; "whole real keeps a decimal")]
    #[test_case(Number::Real(-0.00001), 4 => "-0.0" ; "rounded to negative zero")]
    #[test_case(Number::Integer(15), 4 => "15" ; "integer")]
    fn rounded(number: Number, digits: u32) -> String {
        number.rounded(digits).to_string()
    }
}
