//! Core types for Seagrape.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod quantity;
pub mod username;

pub use id::*;
pub use quantity::{Quantity, QuantityError};
pub use username::{Username, UsernameError};
