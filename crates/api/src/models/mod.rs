//! Domain models for the API.
//!
//! These types represent validated domain objects separate from database
//! row types and from the wire-format views in `routes`.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem};
pub use product::Product;
pub use user::User;
