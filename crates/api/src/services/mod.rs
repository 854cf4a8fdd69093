//! Business-logic services.
//!
//! Services sit between the route handlers and the repositories: handlers
//! parse and validate the wire format, services enforce the domain rules,
//! repositories talk to the database.

pub mod auth;
pub mod cart;
pub mod token;
