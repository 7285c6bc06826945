//! Quote form: the fields a host screen exposes to the calculator
//!
//! Inputs are kept as the text the user typed. The calculator reads them,
//! validates, and writes display text into the output slots. A rejected
//! input only shows the alert; output slots keep whatever they held before.

use log::{info, warn};

use crate::catalog::{populate_tile_sizes, TileSelector};
use crate::quote::{
    calculate, CalculationInput, CalculationResult, QuoteConfig, RenderedQuote, ValidationError,
};

/// Message area, hidden until a validation failure
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertSlot {
    pub text: String,
    pub visible: bool,
}

impl AlertSlot {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Field roles of the quote form
#[derive(Clone, Debug, Default)]
pub struct QuoteForm {
    /// Floor area (m²) as typed
    pub area: String,
    pub tile_size: TileSelector,
    /// Grout width as typed. Accepted but not used by any formula.
    pub grout: String,

    pub total_boxes: String,
    pub total_glue: String,
    pub sub_total: String,
    pub discount: String,
    pub total_price: String,

    pub alert: AlertSlot,

    /// Last successful calculation
    last_result: Option<CalculationResult>,
}

impl QuoteForm {
    /// Create an empty form with the tile selector filled from the catalog
    pub fn new(config: &QuoteConfig) -> Self {
        let mut form = Self::default();
        populate_tile_sizes(Some(config.catalog()), Some(&mut form.tile_size));
        info!(
            "Quote form ready with {} tile sizes",
            form.tile_size.options().len()
        );
        form
    }

    /// Run the calculator against the current field values
    pub fn calculate(
        &mut self,
        config: &QuoteConfig,
    ) -> Result<&CalculationResult, ValidationError> {
        let parsed = CalculationInput::parse(&self.area, self.tile_size.selected_value());

        self.alert.hide();

        let input = match parsed {
            Ok(input) => input,
            Err(e) => {
                warn!(
                    "Rejected input area={:?} tile={:?}: {:?}",
                    self.area,
                    self.tile_size.selected_value(),
                    e
                );
                self.alert.show(e.user_message());
                return Err(e);
            }
        };

        let result = calculate(config, &input);
        self.write_outputs(&RenderedQuote::from_result(&result, config));
        info!(
            "Quote: {:.0} boxes, {:.0} kg glue, final {:.2}",
            result.total_boxes, result.total_glue_kg, result.final_price
        );

        Ok(&*self.last_result.insert(result))
    }

    fn write_outputs(&mut self, rendered: &RenderedQuote) {
        self.total_boxes = rendered.total_boxes.clone();
        self.total_glue = rendered.total_glue.clone();
        self.sub_total = rendered.sub_total.clone();
        self.discount = rendered.discount.clone();
        self.total_price = rendered.total_price.clone();
    }

    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }

    /// (label, slot text) pairs in display order
    pub fn output_rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Dozen", self.total_boxes.as_str()),
            ("Tegellijm", self.total_glue.as_str()),
            ("Subtotaal", self.sub_total.as_str()),
            ("Korting", self.discount.as_str()),
            ("Totaalprijs", self.total_price.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{InvalidReason, VALIDATION_MESSAGE};

    fn outputs(form: &QuoteForm) -> Vec<String> {
        form.output_rows()
            .iter()
            .map(|(_, v)| v.to_string())
            .collect()
    }

    #[test]
    fn test_new_form_populates_selector() {
        let form = QuoteForm::new(&QuoteConfig::default());
        assert_eq!(form.tile_size.options().len(), 5);
        assert_eq!(form.tile_size.selected_value(), Some("1.08"));
        assert!(!form.alert.visible);
        assert!(outputs(&form).iter().all(|v| v.is_empty()));
    }

    #[test]
    fn test_successful_calculation_writes_slots() {
        let config = QuoteConfig::default();
        let mut form = QuoteForm::new(&config);
        form.area = "20".to_string();
        form.grout = "3".to_string();

        let result = form.calculate(&config).unwrap();
        assert_eq!(result.total_boxes, 21.0);

        assert_eq!(
            outputs(&form),
            vec!["21", "90 kg", "€900.00", "-€18.00 (2%)", "€882.00"]
        );
        assert!(!form.alert.visible);
        assert!(form.last_result().is_some());
    }

    #[test]
    fn test_grout_does_not_change_result() {
        let config = QuoteConfig::default();
        let mut form = QuoteForm::new(&config);
        form.area = "20".to_string();
        form.calculate(&config).unwrap();
        let without = outputs(&form);

        form.grout = "10".to_string();
        form.calculate(&config).unwrap();
        assert_eq!(outputs(&form), without);
    }

    #[test]
    fn test_invalid_input_keeps_stale_results() {
        let config = QuoteConfig::default();
        let mut form = QuoteForm::new(&config);
        form.area = "20".to_string();
        form.calculate(&config).unwrap();
        let before = outputs(&form);

        for bad in ["0", "-5", "abc", ""] {
            form.area = bad.to_string();
            assert!(form.calculate(&config).is_err());
            assert!(form.alert.visible);
            assert_eq!(form.alert.text, VALIDATION_MESSAGE);
            assert_eq!(outputs(&form), before);
        }

        // Next valid run hides the alert again
        form.area = "150".to_string();
        form.tile_size.select(2);
        form.calculate(&config).unwrap();
        assert!(!form.alert.visible);
        assert_eq!(form.total_price, "€6075.00");
    }

    #[test]
    fn test_missing_tile_selection() {
        let config = QuoteConfig::default();
        let mut form = QuoteForm::default();
        form.area = "20".to_string();
        assert_eq!(
            form.calculate(&config).unwrap_err(),
            ValidationError::InvalidCoverage(InvalidReason::NotANumber)
        );
        assert!(form.alert.visible);
        assert!(form.total_boxes.is_empty());
    }
}
