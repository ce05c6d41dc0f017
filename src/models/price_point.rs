//! Price point model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One discount tier priced in loyalty currency.
///
/// Created fresh for each calculation call; never persisted. A price point
/// has no identity beyond its position in the output sequence, which always
/// follows the fixed tier schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// The discount tier as a percentage of the full price.
    pub discount_percent: u32,
    /// The cash value of the discount, rounded to 2 decimal places.
    /// Serialized as a JSON number for wire compatibility.
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_discount: Decimal,
    /// Points needed to redeem this tier, always rounded up.
    pub points_required: u64,
}
