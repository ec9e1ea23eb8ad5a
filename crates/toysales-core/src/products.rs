use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root of a sales dataset: `{"items": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Product>,
}

/// A toy stocked by the store together with every recorded sale.
///
/// Keys not listed here (stock levels, descriptions, ...) are ignored on
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// List price before any discount. Accepted as a JSON number or a numeric
    /// string, e.g. `24.99` or `"24.99"`.
    #[serde(rename = "full-price")]
    pub full_price: Decimal,
    pub brand: String,
    pub purchases: Vec<Purchase>,
}

impl Product {
    /// Returns the number of recorded sales.
    #[must_use]
    pub fn purchase_count(&self) -> usize {
        self.purchases.len()
    }

    /// Returns the sum of every purchase price, or zero when nothing sold.
    ///
    /// `None` when the sum does not fit in a [`Decimal`].
    #[must_use]
    pub fn total_sales(&self) -> Option<Decimal> {
        self.purchases
            .iter()
            .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.price))
    }
}

/// A single sale and the amount actually paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Purchase {
    pub price: Decimal,
}
