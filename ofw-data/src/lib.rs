//! Derivations from loaded data plus the current view state.
//!
//! Everything here is a pure function: no caching, no mutation of inputs.
//! Each render recomputes its aggregates from (raw data, ViewState).

pub mod aggregate;
pub mod bounds;
pub mod color;
pub mod filter;
pub mod geojson;
