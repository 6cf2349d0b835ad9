//! Quote price versus list price.
//!
//! A quote below the list price is a discount, above it a surplus. Both are
//! expressed as a positive percentage of the list price rounded to two decimals.
//! Equal prices, a missing price or a non-positive list price mean no adjustment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum PriceAdjustment {
    Discount(f64),
    Surplus(f64),
    None,
}

impl PriceAdjustment {
    pub fn from_prices(list_price: Option<f64>, quoted_price: Option<f64>) -> Self {
        let (Some(list), Some(quoted)) = (list_price, quoted_price) else {
            return PriceAdjustment::None;
        };
        if list <= 0.0 || !list.is_finite() || !quoted.is_finite() {
            return PriceAdjustment::None;
        }

        let percent = round2((list - quoted) / list * 100.0);
        if percent > 0.0 {
            PriceAdjustment::Discount(percent)
        } else if percent < 0.0 {
            PriceAdjustment::Surplus(-percent)
        } else {
            PriceAdjustment::None
        }
    }

    /// "12.50% discount" / "3.00% surplus" / "—"
    pub fn label(&self) -> String {
        match self {
            PriceAdjustment::Discount(p) => format!("{:.2}% discount", p),
            PriceAdjustment::Surplus(p) => format!("{:.2}% surplus", p),
            PriceAdjustment::None => "—".to_string(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_and_surplus() {
        assert_eq!(
            PriceAdjustment::from_prices(Some(10_000.0), Some(8_750.0)),
            PriceAdjustment::Discount(12.5)
        );
        assert_eq!(
            PriceAdjustment::from_prices(Some(10_000.0), Some(10_300.0)),
            PriceAdjustment::Surplus(3.0)
        );
    }

    #[test]
    fn test_zero_and_missing_mean_no_adjustment() {
        assert_eq!(
            PriceAdjustment::from_prices(Some(5_000.0), Some(5_000.0)),
            PriceAdjustment::None
        );
        assert_eq!(PriceAdjustment::from_prices(None, Some(1.0)), PriceAdjustment::None);
        assert_eq!(PriceAdjustment::from_prices(Some(0.0), Some(1.0)), PriceAdjustment::None);
        // rounds to 0.00
        assert_eq!(
            PriceAdjustment::from_prices(Some(100_000.0), Some(99_999.999)),
            PriceAdjustment::None
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(PriceAdjustment::Discount(12.5).label(), "12.50% discount");
        assert_eq!(PriceAdjustment::None.label(), "—");
    }
}
