//! Internal utilities for the ecc384 library
//!
//! Nothing in here is part of the public API. The helpers are shared by the
//! arithmetic, signature and key-agreement crates.

pub mod constant_time;
pub mod endian;
