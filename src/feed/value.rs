// src/feed/value.rs
//
// Scalar cell value from the feed. The inclusion rule is phrased in terms of
// spreadsheet-ish truthiness and number coercion, so those live here.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    /// Convert a gviz `v` field. `null` means "no value".
    pub fn from_json(v: &serde_json::Value) -> Option<Self> {
        use serde_json::Value as J;
        match v {
            J::Null => None,
            J::String(s) => Some(Value::Text(s.clone())),
            J::Number(n) => n.as_f64().map(Value::Number),
            J::Bool(b) => Some(Value::Bool(*b)),
            // gviz never nests; keep whatever it is as text
            other => Some(Value::Text(other.to_string())),
        }
    }

    /// Non-empty text, non-zero number, or `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Text(s) => !s.is_empty(),
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Bool(b) => *b,
        }
    }

    /// Numeric coercion: text is trimmed and parsed, empty text is 0,
    /// anything unparsable is NaN (so it never compares greater than 0).
    /// Text follows sheet-formula number syntax: decimal with optional sign and
    /// exponent, `Infinity`, or unsigned `0x`/`0o`/`0b` integers. Rust-only
    /// spellings like `inf` or `nan` are not numbers.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => if *b { 1.0 } else { 0.0 },
            Value::Text(s) => parse_number(s.trim()),
        }
    }
}

fn parse_number(t: &str) -> f64 {
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match t.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &t[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
    }

    let decimal = t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            // 123.0 → "123"; keep fractions as-is
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Value::Text(s!("x")).is_truthy());
        assert!(!Value::Text(s!()).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn coercion() {
        assert_eq!(Value::Text(s!(" 3 ")).as_number(), 3.0);
        assert_eq!(Value::Text(s!()).as_number(), 0.0);
        assert!(Value::Text(s!("n/a")).as_number().is_nan());
        assert_eq!(Value::Bool(true).as_number(), 1.0);
    }

    #[test]
    fn coercion_uses_sheet_number_syntax() {
        let num = |t: &str| Value::Text(s!(t)).as_number();

        for t in ["inf", "+inf", "infinity", "NaN", "nan", "1_000", "0x", "0xZZ", "-0x10", "e5"] {
            assert!(num(t).is_nan(), "{t:?} should not be a number");
        }
        assert_eq!(num("Infinity"), f64::INFINITY);
        assert_eq!(num("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(num("0x10"), 16.0);
        assert_eq!(num("0b101"), 5.0);
        assert_eq!(num("0o17"), 15.0);
        assert_eq!(num("1e3"), 1000.0);
        assert_eq!(num(".5"), 0.5);
        assert_eq!(num("-2"), -2.0);
    }

    #[test]
    fn display_drops_integral_fraction() {
        assert_eq!(Value::Number(123.0).to_string(), "123");
        assert_eq!(Value::Number(12.5).to_string(), "12.5");
        assert_eq!(Value::Number(-4.0).to_string(), "-4");
    }
}
