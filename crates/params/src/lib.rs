//! Constant values for the ecc384 crates
//!
//! Curve domain parameters and the fixed byte lengths of every value that
//! crosses the public API.

#![no_std]

pub mod traditional;
