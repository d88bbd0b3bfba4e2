//! Quantity-adjustment rules — pure bound checks against `max` and zero.
//!
//! The repository applies these under its write lock so each adjustment is an
//! atomic check-then-set on a single record.

use crate::beer::BeerId;
use crate::error::StockError;

/// Compute the quantity after an increment, rejecting any result above `max`.
///
/// An amount large enough to overflow `i64` cannot be a valid result either,
/// so overflow is reported as exceeding capacity.
pub fn increment(id: BeerId, quantity: i64, max: i64, amount: i64) -> Result<i64, StockError> {
    let new_quantity = quantity
        .checked_add(amount)
        .ok_or(StockError::StockExceeded { id, amount })?;
    if new_quantity > max {
        return Err(StockError::StockExceeded { id, amount });
    }
    Ok(new_quantity)
}

/// Compute the quantity after a decrement, rejecting any result below zero.
pub fn decrement(id: BeerId, quantity: i64, amount: i64) -> Result<i64, StockError> {
    let new_quantity = quantity
        .checked_sub(amount)
        .ok_or(StockError::StockBelowZero { id, amount })?;
    if new_quantity < 0 {
        return Err(StockError::StockBelowZero { id, amount });
    }
    Ok(new_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_within_capacity() {
        assert_eq!(increment(1, 10, 50, 15), Ok(25));
    }

    #[test]
    fn increment_exactly_to_max_is_allowed() {
        assert_eq!(increment(1, 10, 50, 40), Ok(50));
    }

    #[test]
    fn increment_past_max_is_rejected() {
        assert_eq!(
            increment(1, 25, 50, 30),
            Err(StockError::StockExceeded { id: 1, amount: 30 })
        );
    }

    #[test]
    fn increment_overflowing_i64_is_rejected() {
        assert_eq!(
            increment(1, 10, 50, i64::MAX),
            Err(StockError::StockExceeded {
                id: 1,
                amount: i64::MAX
            })
        );
    }

    #[test]
    fn decrement_within_stock() {
        assert_eq!(decrement(1, 25, 5), Ok(20));
    }

    #[test]
    fn decrement_exactly_to_zero_is_allowed() {
        assert_eq!(decrement(1, 20, 20), Ok(0));
    }

    #[test]
    fn decrement_overflowing_i64_is_rejected() {
        assert_eq!(
            decrement(1, 0, i64::MIN),
            Err(StockError::StockBelowZero {
                id: 1,
                amount: i64::MIN
            })
        );
    }

    #[test]
    fn decrement_below_zero_is_rejected() {
        assert_eq!(
            decrement(1, 20, 21),
            Err(StockError::StockBelowZero { id: 1, amount: 21 })
        );
    }
}
