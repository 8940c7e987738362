use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the raw strings captured from the three entry fields.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RawRateFields {
    pub date: String,
    pub gold_price: String,
    pub silver_price: String,
}

impl RawRateFields {
    /// Validates that every field is non-empty before submission.
    ///
    /// This is the requiredness check the input widgets enforce; it is the
    /// only gate in front of `submit`. Non-empty garbage still passes and
    /// surfaces later as `NaN` / `Invalid Date` on the display screen.
    pub fn validate_required(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.date.trim().is_empty() {
            errors.push("Date is required.".to_string());
        }
        if self.gold_price.trim().is_empty() {
            errors.push("Gold price is required.".to_string());
        }
        if self.silver_price.trim().is_empty() {
            errors.push("Silver price is required.".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// The rate tuple produced by one form submission.
///
/// Immutable once constructed; a new submission constructs a new record and
/// replaces the previous one. Only the latest record is ever held.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RateRecord {
    /// The date string exactly as entered, parsed only at display time.
    pub date: String,
    /// Price for 8 grams, 22 carat. `NaN` when the raw field did not parse.
    pub gold_price: f64,
    /// Price for 10 grams. `NaN` when the raw field did not parse.
    pub silver_price: f64,
}

impl RateRecord {
    /// Builds a record from raw form input.
    ///
    /// The date is taken verbatim. Prices parse tolerantly: a field that is
    /// not a number becomes `NaN` and flows through to the formatter rather
    /// than rejecting the submission.
    pub fn from_raw(raw: &RawRateFields) -> Self {
        Self {
            date: raw.date.clone(),
            gold_price: parse_price(&raw.gold_price),
            silver_price: parse_price(&raw.silver_price),
        }
    }
}

impl PartialEq for RateRecord {
    fn eq(&self, other: &Self) -> bool {
        // Two NaN prices compare equal so that re-submitting the same raw
        // fields reproduces an equal record.
        fn price_eq(a: f64, b: f64) -> bool {
            (a.is_nan() && b.is_nan()) || a == b
        }

        self.date == other.date
            && price_eq(self.gold_price, other.gold_price)
            && price_eq(self.silver_price, other.silver_price)
    }
}

impl fmt::Display for RateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "date={} gold={} silver={}",
            self.date, self.gold_price, self.silver_price
        )
    }
}

/// Parses a price field into an `f64`.
///
/// Trims whitespace and strips comma group separators (the masked numeric
/// inputs insert them). Anything that still fails to parse, including an
/// empty string, yields `NaN`.
pub fn parse_price(s: &str) -> f64 {
    let normalized = s.trim().replace(',', "");
    normalized.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_price_plain_and_grouped() {
        assert_eq!(parse_price("54000"), 54000.0);
        assert_eq!(parse_price("1,234.56"), 1234.56);
        assert_eq!(parse_price("  750 "), 750.0);
    }

    #[test]
    fn parse_price_zero_is_accepted() {
        assert_eq!(parse_price("0"), 0.0);
    }

    #[test]
    fn parse_price_garbage_becomes_nan() {
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("").is_nan());
        assert!(parse_price("12abc").is_nan());
    }

    #[test]
    fn from_raw_keeps_date_verbatim() {
        let raw = RawRateFields {
            date: "2024-03-15".into(),
            gold_price: "54000".into(),
            silver_price: "750".into(),
        };
        let record = RateRecord::from_raw(&raw);
        assert_eq!(record.date, "2024-03-15");
        assert_eq!(record.gold_price, 54000.0);
        assert_eq!(record.silver_price, 750.0);
    }

    #[test]
    fn resubmitting_the_same_fields_reproduces_an_equal_record() {
        let raw = RawRateFields {
            date: "2024-01-01".into(),
            gold_price: "not a price".into(),
            silver_price: "0".into(),
        };
        assert_eq!(RateRecord::from_raw(&raw), RateRecord::from_raw(&raw));
    }

    #[test]
    fn validate_required_flags_each_empty_field() {
        let raw = RawRateFields::default();
        let errors = raw.validate_required().unwrap_err();
        assert_eq!(errors.len(), 3);

        let raw = RawRateFields {
            date: "2024-03-15".into(),
            gold_price: "54000".into(),
            silver_price: "750".into(),
        };
        assert!(raw.validate_required().is_ok());
    }
}
