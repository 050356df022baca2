//! Money arithmetic for cart totals
//!
//! Prices travel as `f64`; sums are computed in `Decimal` and rounded to two
//! places on the way out.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Decimal back to `f64`, rounded half away from zero
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `price * quantity`; absent, zero or non-finite prices contribute nothing.
///
/// Saturates at `Decimal::MAX` when the product does not fit.
pub fn line_total(price: Option<f64>, quantity: u32) -> Decimal {
    match price {
        Some(p) if p.is_finite() && p > 0.0 => to_decimal(p)
            .checked_mul(Decimal::from(quantity))
            .unwrap_or_else(|| {
                tracing::warn!(price = p, quantity, "Line total overflowed, saturating");
                Decimal::MAX
            }),
        _ => Decimal::ZERO,
    }
}

/// Sum of line totals, saturating at `Decimal::MAX`
pub fn sum_totals(lines: impl IntoIterator<Item = Decimal>) -> Decimal {
    lines
        .into_iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        assert_eq!(to_f64(line_total(Some(100.0), 2)), 200.0);
        assert_eq!(to_f64(line_total(None, 5)), 0.0);
        assert_eq!(to_f64(line_total(Some(0.0), 5)), 0.0);
        assert_eq!(to_f64(line_total(Some(f64::NAN), 1)), 0.0);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(line_total(Some(1e20), u32::MAX), Decimal::MAX);
        assert_eq!(sum_totals([Decimal::MAX, line_total(Some(10.0), 1)]), Decimal::MAX);
        assert!(to_f64(Decimal::MAX).is_finite());
    }

    #[test]
    fn test_no_float_drift() {
        let sum = line_total(Some(0.1), 3) + line_total(Some(0.2), 1);
        assert_eq!(to_f64(sum), 0.5);
    }
}
