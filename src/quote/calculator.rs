// tile-quote/src/quote/calculator.rs

use super::config::QuoteConfig;
use super::input::CalculationInput;
use log::debug;

/// Volume discount band, chosen from the subtotal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscountTier {
    /// subtotal <= 0
    None,
    /// 0 < subtotal < 1000
    Small,
    /// 1000 <= subtotal <= 5000
    Medium,
    /// subtotal > 5000
    Large,
}

/// Subtotal above which the large discount applies (exclusive)
const LARGE_TIER_FLOOR: f64 = 5000.0;
/// Subtotal from which the medium discount applies (inclusive)
const MEDIUM_TIER_FLOOR: f64 = 1000.0;

impl DiscountTier {
    pub fn for_subtotal(sub_total: f64) -> Self {
        if sub_total > LARGE_TIER_FLOOR {
            DiscountTier::Large
        } else if sub_total >= MEDIUM_TIER_FLOOR {
            DiscountTier::Medium
        } else if sub_total > 0.0 {
            DiscountTier::Small
        } else {
            DiscountTier::None
        }
    }

    /// Whole percentage, e.g. 5
    pub fn percent(&self) -> u8 {
        match self {
            DiscountTier::None => 0,
            DiscountTier::Small => 2,
            DiscountTier::Medium => 5,
            DiscountTier::Large => 10,
        }
    }

    /// Fraction applied to the subtotal, e.g. 0.05
    pub fn rate(&self) -> f64 {
        f64::from(self.percent()) / 100.0
    }
}

/// Material quantities and price for one calculation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    /// Floor area plus waste allowance (m²)
    pub required_area: f64,
    /// Whole number of boxes, kept as f64 so huge areas cannot overflow
    pub total_boxes: f64,
    /// Whole kilograms of adhesive
    pub total_glue_kg: f64,
    pub sub_total: f64,
    pub discount: DiscountTier,
    pub discount_amount: f64,
    pub final_price: f64,
}

/// Work out boxes, adhesive and the discounted price.
///
/// Boxes cover the area plus waste; adhesive and price are based on the raw
/// floor area. Both box and adhesive counts round up.
pub fn calculate(config: &QuoteConfig, input: &CalculationInput) -> CalculationResult {
    let area = input.area();

    let required_area = area * (1.0 + config.waste_fraction());
    let total_boxes = (required_area / input.coverage_per_box()).ceil();
    let total_glue_kg = (area * config.glue_kg_per_sqm()).ceil();
    let sub_total = area * config.price_per_sqm();

    let discount = DiscountTier::for_subtotal(sub_total);
    let discount_amount = sub_total * discount.rate();
    let final_price = sub_total - discount_amount;

    debug!(
        "area={} required_area={} coverage={} boxes={} glue={}kg",
        area,
        required_area,
        input.coverage_per_box(),
        total_boxes,
        total_glue_kg
    );
    debug!(
        "sub_total={} discount={}% amount={} final={}",
        sub_total,
        discount.percent(),
        discount_amount,
        final_price
    );

    CalculationResult {
        required_area,
        total_boxes,
        total_glue_kg,
        sub_total,
        discount,
        discount_amount,
        final_price,
    }
}
