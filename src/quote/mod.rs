// tile-quote/src/quote/mod.rs

mod calculator;
mod config;
mod errors;
mod input;
mod render;

pub use calculator::{calculate, CalculationResult, DiscountTier};
pub use config::{
    QuoteConfig, QuoteConfigBuilder, CURRENCY_SYMBOL, GLUE_KG_PER_SQM, PRICE_PER_SQM,
    WASTE_FRACTION,
};
pub use errors::{ConfigError, ExportError, InvalidReason, ValidationError, VALIDATION_MESSAGE};
pub use input::{parse_number, CalculationInput};
pub use render::{format_currency, RenderedQuote};
