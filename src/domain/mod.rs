//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types used by the app and the chart layer
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod coin;
pub mod ohlc;
