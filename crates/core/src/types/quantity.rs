//! Cart item quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a quantity is out of range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("quantity must be at least 1")]
pub struct QuantityError;

/// A cart line quantity, always at least 1.
///
/// Carts never store zero or negative quantities: removing an item is a
/// separate operation, and an update to a non-positive quantity is a
/// validation error rather than an implicit delete.
///
/// ## Examples
///
/// ```
/// use seagrape_core::Quantity;
///
/// assert_eq!(Quantity::new(3).map(|q| q.as_i32()), Ok(3));
/// assert!(Quantity::new(0).is_err());
/// assert!(Quantity::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    /// Create a quantity, rejecting values below 1.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError`] if `value < 1`.
    pub const fn new(value: i32) -> Result<Self, QuantityError> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(QuantityError)
        }
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}
