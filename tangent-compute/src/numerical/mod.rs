//! Numeric evaluation of expression trees.
//!
//! This module is gated behind the `numerical` feature, which is enabled by default.

#![cfg(feature = "numerical")]

pub mod env;
pub mod error;
pub mod eval;
