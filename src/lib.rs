use std::sync::Once;

static INIT: Once = Once::new();

pub fn setup_pretty_env_logger_default() {
    INIT.call_once(|| {
        pretty_env_logger::init();
    });
}

pub use form::{AlertSlot, QuoteForm};
pub use quote::{calculate, CalculationInput, CalculationResult, QuoteConfig, ValidationError};
pub mod catalog;
pub mod form;
pub mod quote;
pub mod tui;
