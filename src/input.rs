use std::fmt;

/// Anything a caller might hand over as a status code
///
/// Status codes frequently arrive as text (headers, CGI variables, config files), so lookups accept
/// strings and floats alongside integers. How strictly the value is read depends on the operation:
/// [`StatusRegistry::get_reason`](crate::StatusRegistry::get_reason) wants the whole input to be
/// an integer, while [`StatusRegistry::is_success`](crate::StatusRegistry::is_success) only reads
/// the leading integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodeInput<'a> {
    Integer(i128),
    Float(f64),
    Text(&'a str),
}

/// How an input reads when it has to be exactly an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exact {
    Integer(i128),
    /// A well-formed integer too large for `i128`
    OutOfRange,
}

// 2^127, the first float magnitude that no longer fits in an i128
const I128_LIMIT: f64 = i128::MAX as f64;

impl CodeInput<'_> {
    /// The integer a lenient parse reads from the start of the input
    ///
    /// `" 204 No Content"` reads as `204`, `200.5` as `200`.
    pub(crate) fn leading_integer(&self) -> Option<i128> {
        match *self {
            Self::Integer(n) => Some(n),
            Self::Float(f) if f.is_finite() && f.abs() < I128_LIMIT => Some(f.trunc() as i128),
            Self::Float(_) => None,
            Self::Text(s) => {
                let (negative, digits) = leading_digits(s)?;
                signed_integer(negative, digits)
            }
        }
    }

    /// The integer value of the input, if the input is exactly that integer and nothing else
    pub(crate) fn exact_integer(&self) -> Option<Exact> {
        match *self {
            Self::Integer(n) => Some(Exact::Integer(n)),
            Self::Float(f) if !f.is_finite() || f.fract() != 0.0 => None,
            Self::Float(f) if f.abs() < I128_LIMIT => Some(Exact::Integer(f as i128)),
            Self::Float(_) => Some(Exact::OutOfRange),
            Self::Text(s) => {
                let (negative, digits) = leading_digits(s)?;

                // Catches trailing garbage as well as forms like "2e2", whose
                // leading integer (2) differs from their value (200)
                let value: f64 = s.trim().parse().ok()?;
                let magnitude: f64 = digits.parse().ok()?;
                let lead = if negative { -magnitude } else { magnitude };
                if value != lead {
                    return None;
                }

                let exact =
                    signed_integer(negative, digits).map_or(Exact::OutOfRange, Exact::Integer);
                Some(exact)
            }
        }
    }
}

/// Splits off the sign and the run of ascii digits at the start of `s`
fn leading_digits(s: &str) -> Option<(bool, &str)> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        return None;
    }

    Some((negative, digits))
}

fn signed_integer(negative: bool, digits: &str) -> Option<i128> {
    let magnitude: i128 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for CodeInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! integer_impls {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CodeInput<'_> {
                fn from(value: $t) -> Self {
                    CodeInput::Integer(i128::from(value))
                }
            }
        )*
    }
}

integer_impls! { u8, u16, u32, u64, i8, i16, i32, i64, i128 }

// Values beyond i128 fall back to a float, which still reads as an out of range integer
macro_rules! wide_integer_impls {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CodeInput<'_> {
                fn from(value: $t) -> Self {
                    i128::try_from(value).map_or(CodeInput::Float(value as f64), CodeInput::Integer)
                }
            }
        )*
    }
}

wide_integer_impls! { usize, isize, u128 }

impl From<f32> for CodeInput<'_> {
    fn from(value: f32) -> Self {
        CodeInput::Float(f64::from(value))
    }
}

impl From<f64> for CodeInput<'_> {
    fn from(value: f64) -> Self {
        CodeInput::Float(value)
    }
}

impl<'a> From<&'a str> for CodeInput<'a> {
    fn from(value: &'a str) -> Self {
        CodeInput::Text(value)
    }
}

impl<'a> From<&'a String> for CodeInput<'a> {
    fn from(value: &'a String) -> Self {
        CodeInput::Text(value.as_str())
    }
}
