//! The bilingual rate card formatter.
//!
//! [`render_card`] is a pure function of the active [`RateRecord`]. Each
//! value is formatted exactly once and cloned into both columns, so the
//! English and Telugu columns can never diverge. The on-screen and exported
//! renditions both consume the same [`RateCard`].

use chrono::NaiveDate;

use crate::models::RateRecord;

pub const SHOP_NAME_EN: &str = "Balaji Jewellery Mart";
pub const SHOP_NAME_TE: &str = "బాలాజీ జ్యువెల్లరీ మార్ట్";
pub const ADDRESS_EN: &str = "Address: Main Road, Nuzvid, 521201";
pub const ADDRESS_TE: &str = "చిరునామా: మైన్ రోడ్, నూజివిడ్, 521201";
pub const PHONE_EN: &str = "Call: 9440635925";
pub const PHONE_TE: &str = "కాల్: 9440635925";
pub const CARD_TITLE_EN: &str = "Current Rates";
pub const CARD_TITLE_TE: &str = "ప్రస్తుత ధరలు";
pub const FOOTER_EN: &str = "© 2024 Balaji Jewellery Mart. All rights reserved.";
pub const FOOTER_TE: &str = "© 2024 బాలాజీ జ్యువెల్లరీ మార్ట్. అన్ని హక్కులు సురక్షితం.";

/// Rendered when the stored date string does not parse as a calendar date.
pub const INVALID_DATE: &str = "Invalid Date";

const RUPEE: char = '₹';

/// One label/value line on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub label: &'static str,
    pub value: String,
}

/// One language column: a heading and the three field rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardColumn {
    pub heading: &'static str,
    pub rows: [CardRow; 3],
}

/// The fully formatted card: header, two columns, footer. This is the
/// region that gets captured for export; action buttons live outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCard {
    /// The formatted date, also the basis for the export file name.
    pub date_display: String,
    pub columns: [CardColumn; 2],
}

/// Formats the active record into the bilingual card.
pub fn render_card(record: &RateRecord) -> RateCard {
    let date = format_display_date(&record.date);
    let gold = format_price(record.gold_price);
    let silver = format_price(record.silver_price);

    RateCard {
        date_display: date.clone(),
        columns: [
            CardColumn {
                heading: "English",
                rows: [
                    CardRow { label: "Date:", value: date.clone() },
                    CardRow {
                        label: "Gold Price (8 grams, 22 Carat):",
                        value: gold.clone(),
                    },
                    CardRow { label: "Silver Price (10 grams):", value: silver.clone() },
                ],
            },
            CardColumn {
                heading: "తెలుగు",
                rows: [
                    CardRow { label: "తేదీ:", value: date },
                    CardRow {
                        label: "బంగారం ధర (8 గ్రాములు, 22 క్యారెట్):",
                        value: gold,
                    },
                    CardRow { label: "వెండి ధర (10 గ్రాములు):", value: silver },
                ],
            },
        ],
    }
}

/// Formats the stored date string as day/month/year.
///
/// Unparseable input renders as [`INVALID_DATE`] instead of failing; the
/// submission path never rejects a bad date.
pub fn format_display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Formats a price with the rupee glyph and 3-digit grouping separators.
///
/// At most three fraction digits are kept, trailing zeros trimmed. `NaN`
/// (a failed parse upstream) renders as `₹NaN` rather than failing.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return format!("{RUPEE}NaN");
    }
    if value.is_infinite() {
        return if value > 0.0 {
            format!("{RUPEE}∞")
        } else {
            format!("{RUPEE}-∞")
        };
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    // Past 1e15 the f64 integer grid is coarser than one rupee; grouping
    // digits there would present noise as precision.
    if magnitude >= 1e15 {
        return if negative {
            format!("{RUPEE}-{magnitude}")
        } else {
            format!("{RUPEE}{magnitude}")
        };
    }

    let scaled = (magnitude * 1000.0).round() as u64;
    let int_part = scaled / 1000;
    let frac_part = scaled % 1000;

    let mut out = String::new();
    out.push(RUPEE);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if frac_part != 0 {
        let frac = format!("{frac_part:03}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRateFields;
    use pretty_assertions::assert_eq;

    fn card_for(date: &str, gold: &str, silver: &str) -> RateCard {
        render_card(&RateRecord::from_raw(&RawRateFields {
            date: date.into(),
            gold_price: gold.into(),
            silver_price: silver.into(),
        }))
    }

    #[test]
    fn scenario_a_formats_date_and_prices() {
        let card = card_for("2024-03-15", "54000", "750");
        assert_eq!(card.date_display, "15/03/2024");
        assert_eq!(card.columns[0].rows[0].value, "15/03/2024");
        assert_eq!(card.columns[0].rows[1].value, "₹54,000");
        assert_eq!(card.columns[0].rows[2].value, "₹750");
    }

    #[test]
    fn scenario_b_zero_prices_render_as_zero() {
        let card = card_for("2024-01-01", "0", "0");
        assert_eq!(card.columns[0].rows[1].value, "₹0");
        assert_eq!(card.columns[0].rows[2].value, "₹0");
    }

    #[test]
    fn both_columns_carry_identical_values() {
        let card = card_for("2024-03-15", "54000.25", "not a number");
        for (en, te) in card.columns[0].rows.iter().zip(card.columns[1].rows.iter()) {
            assert_eq!(en.value, te.value);
            assert_ne!(en.label, te.label);
        }
    }

    #[test]
    fn nan_price_renders_as_nan_token() {
        assert_eq!(format_price(f64::NAN), "₹NaN");
    }

    #[test]
    fn invalid_date_renders_as_placeholder() {
        assert_eq!(format_display_date("soon"), INVALID_DATE);
        assert_eq!(format_display_date(""), INVALID_DATE);
        assert_eq!(format_display_date("2024-13-40"), INVALID_DATE);
    }

    #[test]
    fn grouping_covers_large_values() {
        assert_eq!(format_price(1234567.89), "₹1,234,567.89");
        assert_eq!(format_price(1000.0), "₹1,000");
        assert_eq!(format_price(999.0), "₹999");
    }

    #[test]
    fn fraction_digits_are_trimmed() {
        assert_eq!(format_price(750.5), "₹750.5");
        assert_eq!(format_price(750.50), "₹750.5");
        assert_eq!(format_price(750.004), "₹750.004");
    }
}
