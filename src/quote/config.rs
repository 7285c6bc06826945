// tile-quote/src/quote/config.rs

use super::errors::ConfigError;
use crate::catalog::Catalog;
use derive_builder::Builder;

/// Price charged per m² of floor area
pub const PRICE_PER_SQM: f64 = 45.00;
/// Extra fraction of area bought to cover cutting loss
pub const WASTE_FRACTION: f64 = 0.10;
/// Adhesive consumption (kg per m²)
pub const GLUE_KG_PER_SQM: f64 = 4.5;
pub const CURRENCY_SYMBOL: &str = "€";

/// Pricing constants and the tile catalog.
///
/// Built once at startup and handed to the calculator by reference. There are
/// no setters; a different configuration means building a new one.
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate", error = "ConfigError"))]
pub struct QuoteConfig {
    #[builder(default = "PRICE_PER_SQM")]
    price_per_sqm: f64,
    #[builder(default = "WASTE_FRACTION")]
    waste_fraction: f64,
    #[builder(default = "GLUE_KG_PER_SQM")]
    glue_kg_per_sqm: f64,
    #[builder(setter(into), default = "CURRENCY_SYMBOL.to_string()")]
    currency_symbol: String,
    #[builder(default)]
    catalog: Catalog,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            price_per_sqm: PRICE_PER_SQM,
            waste_fraction: WASTE_FRACTION,
            glue_kg_per_sqm: GLUE_KG_PER_SQM,
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            catalog: Catalog::standard(),
        }
    }
}

impl QuoteConfig {
    pub fn price_per_sqm(&self) -> f64 {
        self.price_per_sqm
    }

    pub fn waste_fraction(&self) -> f64 {
        self.waste_fraction
    }

    pub fn glue_kg_per_sqm(&self) -> f64 {
        self.glue_kg_per_sqm
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl QuoteConfigBuilder {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(price) = self.price_per_sqm {
            if !price.is_finite() || price <= 0.0 {
                return Err(ConfigError::InvalidPrice(price));
            }
        }
        if let Some(waste) = self.waste_fraction {
            if !waste.is_finite() || waste < 0.0 {
                return Err(ConfigError::InvalidWasteFraction(waste));
            }
        }
        if let Some(rate) = self.glue_kg_per_sqm {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::InvalidGlueRate(rate));
            }
        }
        if let Some(ref catalog) = self.catalog {
            if catalog.is_empty() {
                return Err(ConfigError::EmptyCatalog);
            }
            if let Some(idx) = catalog
                .options()
                .iter()
                .position(|t| !t.coverage_per_box.is_finite() || t.coverage_per_box <= 0.0)
            {
                return Err(ConfigError::InvalidCoverage(idx));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TileOption;

    #[test]
    fn test_builder_defaults_match_constants() {
        let config = QuoteConfigBuilder::default().build().unwrap();
        assert_eq!(config, QuoteConfig::default());
        assert_eq!(config.price_per_sqm(), 45.0);
        assert_eq!(config.waste_fraction(), 0.10);
        assert_eq!(config.glue_kg_per_sqm(), 4.5);
        assert_eq!(config.currency_symbol(), "€");
        assert_eq!(config.catalog().len(), 5);
    }

    #[test]
    fn test_builder_overrides() {
        let config = QuoteConfigBuilder::default()
            .price_per_sqm(50.0)
            .waste_fraction(0.0)
            .currency_symbol("$")
            .build()
            .unwrap();
        assert_eq!(config.price_per_sqm(), 50.0);
        assert_eq!(config.waste_fraction(), 0.0);
        assert_eq!(config.currency_symbol(), "$");
        assert_eq!(config.glue_kg_per_sqm(), 4.5);
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        assert!(matches!(
            QuoteConfigBuilder::default().price_per_sqm(0.0).build(),
            Err(ConfigError::InvalidPrice(_))
        ));
        assert!(matches!(
            QuoteConfigBuilder::default().waste_fraction(-0.1).build(),
            Err(ConfigError::InvalidWasteFraction(_))
        ));
        assert!(matches!(
            QuoteConfigBuilder::default().glue_kg_per_sqm(f64::NAN).build(),
            Err(ConfigError::InvalidGlueRate(_))
        ));
        assert!(matches!(
            QuoteConfigBuilder::default()
                .catalog(Catalog::from_options(vec![]))
                .build(),
            Err(ConfigError::EmptyCatalog)
        ));
        assert!(matches!(
            QuoteConfigBuilder::default()
                .catalog(Catalog::from_options(vec![
                    TileOption::new("10 x 10 cm", 1.0),
                    TileOption::new("broken", 0.0),
                ]))
                .build(),
            Err(ConfigError::InvalidCoverage(1))
        ));
    }
}
