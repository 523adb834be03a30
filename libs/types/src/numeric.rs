//! Integer tick types for prices and quantities
//!
//! Prices and quantities are plain signed integers. Construction performs no
//! bounds check: admission validation is an engine concern, and modification
//! deliberately bypasses it. `is_positive` is the single predicate both
//! paths share.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Price of an order, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from a raw tick value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw tick value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Check if the price is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity of an order, in units
///
/// Remaining quantity is decremented by trades and may transiently reach
/// zero, at which point the order is removed from the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Create a quantity from a raw unit value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Zero quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the raw unit value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Check if the quantity is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Smaller of two quantities
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Self) -> Self::Output {
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
