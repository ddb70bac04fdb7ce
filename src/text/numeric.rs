use super::whitespace::LocaleProvider;
use crate::engine::error::TextError;

/// Most significant digits an `f64` can carry without rounding them away
/// (`max_digits10`).
const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Recognizes decimal integer and floating-point literals.
///
/// Every check is a plain yes/no answer; malformed or out-of-range input is
/// `false`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRecognizer {
    decimal_point: char,
}

impl Default for NumericRecognizer {
    fn default() -> Self {
        Self { decimal_point: '.' }
    }
}

impl NumericRecognizer {
    pub fn new(decimal_point: char) -> Result<Self, TextError> {
        if decimal_point.is_ascii_digit()
            || decimal_point == '-'
            || decimal_point.is_whitespace()
        {
            return Err(TextError::invalid_argument(format!(
                "{:?} cannot be used as a decimal point",
                decimal_point
            )));
        }

        Ok(Self { decimal_point })
    }

    pub fn for_locale(locale: &dyn LocaleProvider) -> Result<Self, TextError> {
        Self::new(locale.decimal_point())
    }

    pub fn decimal_point(&self) -> char {
        self.decimal_point
    }

    /// Optional `-`, one or more ASCII digits, and the value fits an `i64`.
    pub fn is_integer(&self, s: &str) -> bool {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        s.parse::<i64>().is_ok()
    }

    /// Optional `-`, digits around exactly one decimal point, and a value an
    /// `f64` holds without overflow, underflow or rounding.
    ///
    /// More than 17 significant digits counts as out of range, so
    /// `"0.123456789012345678"` is rejected even though a plain parse would
    /// round it. A non-zero literal that parses to `0.0` has underflowed and is
    /// rejected too. Plain integers and exponent notation (`"1e3"`) are not
    /// floats here.
    pub fn is_float(&self, s: &str) -> bool {
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let mut points = 0;
        let mut digits = 0;

        for c in unsigned.chars() {
            if c == self.decimal_point {
                points += 1;
            } else if c.is_ascii_digit() {
                digits += 1;
            } else {
                return false;
            }
        }

        if points != 1 || digits == 0 {
            return false;
        }

        let significant = significant_digits(unsigned);
        if significant > MAX_SIGNIFICANT_DIGITS {
            log::debug!("Rejecting {:?}: more precision than f64 holds", s);
            return false;
        }

        let normalized: String = s
            .chars()
            .map(|c| if c == self.decimal_point { '.' } else { c })
            .collect();

        match normalized.parse::<f64>() {
            Ok(value) if !value.is_finite() => false,
            Ok(value) if value == 0.0 && significant > 0 => {
                log::debug!("Rejecting {:?}: underflows to zero", s);
                false
            }
            Ok(_) => true,
            Err(_) => false,
        }
    }

    pub fn is_number(&self, s: &str) -> bool {
        self.is_integer(s) || self.is_float(s)
    }
}

fn significant_digits(unsigned: &str) -> usize {
    let digits: String = unsigned.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').trim_end_matches('0').len()
}

pub fn is_integer(s: &str) -> bool {
    NumericRecognizer::default().is_integer(s)
}

pub fn is_float(s: &str) -> bool {
    NumericRecognizer::default().is_float(s)
}

pub fn is_number(s: &str) -> bool {
    NumericRecognizer::default().is_number(s)
}

/// Keeps only the ASCII digits of `s`.
pub fn erase_non_numeric_chars(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}
