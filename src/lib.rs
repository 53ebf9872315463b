//! numclass - A small number classification API
//!
//! Given a number, numclass reports:
//! - Primality and perfection
//! - Armstrong-number status and digit sum
//! - Parity (or floating-point) tags
//! - A fun fact, synthesized for Armstrong numbers or fetched from a
//!   numbers-trivia service

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod fact;
pub mod types;

pub use error::{Error, Result};
