// tile-quote/src/quote/render.rs

use super::calculator::CalculationResult;
use super::config::QuoteConfig;
use super::errors::ExportError;
use std::fmt;
use std::io;

/// Format a money amount with two decimals, e.g. "€882.00".
///
/// The stored binary value is rounded as is; only a value lying exactly on a
/// half cent rounds away from zero.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    if is_half_cent(amount) {
        // x * 100 is exact here (an odd multiple of 12.5)
        let rounded = (amount * 100.0).round() / 100.0;
        format!("{}{:.2}", symbol, rounded)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// A binary value sits exactly on a half cent only when it is an odd number
/// of eighths (0.125, 0.375, ...).
fn is_half_cent(amount: f64) -> bool {
    let eighths = amount.abs() * 8.0;
    eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

/// Display text for each result slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedQuote {
    pub total_boxes: String,
    pub total_glue: String,
    pub sub_total: String,
    pub discount: String,
    pub total_price: String,
}

impl RenderedQuote {
    pub fn from_result(result: &CalculationResult, config: &QuoteConfig) -> Self {
        let symbol = config.currency_symbol();
        Self {
            total_boxes: format!("{:.0}", result.total_boxes),
            total_glue: format!("{:.0} kg", result.total_glue_kg),
            sub_total: format_currency(symbol, result.sub_total),
            discount: format!(
                "-{} ({}%)",
                format_currency(symbol, result.discount_amount),
                result.discount.percent()
            ),
            total_price: format_currency(symbol, result.final_price),
        }
    }

    /// (label, value) pairs in display order
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Dozen", self.total_boxes.as_str()),
            ("Tegellijm", self.total_glue.as_str()),
            ("Subtotaal", self.sub_total.as_str()),
            ("Korting", self.discount.as_str()),
            ("Totaalprijs", self.total_price.as_str()),
        ]
    }

    /// Write the quote as `field,value` CSV rows
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["field", "value"])?;
        let fields = [
            ("total_boxes", &self.total_boxes),
            ("total_glue", &self.total_glue),
            ("sub_total", &self.sub_total),
            ("discount", &self.discount),
            ("total_price", &self.total_price),
        ];
        for (field, value) in fields {
            wtr.write_record([field, value.as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl fmt::Display for RenderedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{:<12} {:>16}", label, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{calculate, CalculationInput};

    fn render(area: f64, coverage: f64) -> RenderedQuote {
        let config = QuoteConfig::default();
        let input = CalculationInput::new(area, coverage).unwrap();
        RenderedQuote::from_result(&calculate(&config, &input), &config)
    }

    #[test]
    fn test_render_small_quote() {
        let quote = render(20.0, 1.08);
        assert_eq!(quote.total_boxes, "21");
        assert_eq!(quote.total_glue, "90 kg");
        assert_eq!(quote.sub_total, "€900.00");
        assert_eq!(quote.discount, "-€18.00 (2%)");
        assert_eq!(quote.total_price, "€882.00");
    }

    #[test]
    fn test_render_large_quote() {
        let quote = render(150.0, 1.50);
        assert_eq!(quote.sub_total, "€6750.00");
        assert_eq!(quote.discount, "-€675.00 (10%)");
        assert_eq!(quote.total_price, "€6075.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("€", 0.0), "€0.00");
        assert_eq!(format_currency("€", 12.5), "€12.50");
        assert_eq!(format_currency("€", 0.125), "€0.13");
        assert_eq!(format_currency("€", 0.375), "€0.38");
        assert_eq!(format_currency("$", 1234.567), "$1234.57");

        // Stored just below the half cent, so these round down
        assert_eq!(format_currency("€", 19.845), "€19.84");
        assert_eq!(format_currency("€", 46.305), "€46.30");
    }

    #[test]
    fn test_render_rounds_stored_price() {
        // 0.45 m²: 20.25 - 2% = 19.845 (stored as 19.84499..)
        let quote = render(0.45, 1.08);
        assert_eq!(quote.sub_total, "€20.25");
        assert_eq!(quote.discount, "-€0.41 (2%)");
        assert_eq!(quote.total_price, "€19.84");

        // 1.05 m²: 47.25 - 2% = 46.305 (stored as 46.30499..)
        let quote = render(1.05, 1.08);
        assert_eq!(quote.total_price, "€46.30");
    }

    #[test]
    fn test_render_whole_counts_for_huge_area() {
        let quote = render(1e20, 1.08);
        assert!(!quote.total_boxes.contains('.'));
        assert!(!quote.total_boxes.contains('e'));
        assert!(quote.total_glue.ends_with(" kg"));
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        render(20.0, 1.08).write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "field,value");
        assert_eq!(lines[1], "total_boxes,21");
        assert_eq!(lines[4], "discount,-€18.00 (2%)");
        assert_eq!(lines[5], "total_price,€882.00");
    }

    #[test]
    fn test_display_lists_every_slot() {
        let text = render(20.0, 1.08).to_string();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("Totaalprijs"));
        assert!(text.contains("€882.00"));
    }
}
