// tile-quote/src/quote/errors.rs

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Message shown to the user whenever the form input is rejected
pub const VALIDATION_MESSAGE: &str = "Vul geldige waarden in voor oppervlakte en tegelgrootte.";

/// Why a numeric input was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    /// Missing or no numeric prefix
    NotANumber,
    /// Zero or negative
    NotPositive,
}

/// Form input could not be used for a calculation.
///
/// Every variant renders as the same fixed user message; the variant itself
/// is only there for logs and tests.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Vul geldige waarden in voor oppervlakte en tegelgrootte.")]
    InvalidArea(InvalidReason),
    #[error("Vul geldige waarden in voor oppervlakte en tegelgrootte.")]
    InvalidCoverage(InvalidReason),
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unitialized field on QuoteConfigBuilder: {0}")]
    UninitializedFieldError(String),
    #[error("price per m² must be a finite value > 0, got {0}")]
    InvalidPrice(f64),
    #[error("waste fraction must be a finite value >= 0, got {0}")]
    InvalidWasteFraction(f64),
    #[error("glue consumption rate must be a finite value > 0, got {0}")]
    InvalidGlueRate(f64),
    #[error("tile catalog is empty")]
    EmptyCatalog,
    #[error("tile catalog entry {0} has a non-positive coverage per box")]
    InvalidCoverage(usize),
}

impl From<UninitializedFieldError> for ConfigError {
    fn from(e: UninitializedFieldError) -> Self {
        ConfigError::UninitializedFieldError(e.field_name().to_string())
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("File IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
