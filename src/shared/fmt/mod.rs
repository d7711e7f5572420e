//! Display formatting helpers.

pub mod num;
