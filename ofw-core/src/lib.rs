//! Core data types for the ocean flow dashboard: occurrence records and
//! their GeoJSON ingestion, the shared view state, month-index arithmetic,
//! and the subset-API request/response types.

pub mod currents;
pub mod date_range;
pub mod month_index;
pub mod occurrence;
pub mod regions;
pub mod seasonality;
pub mod species_stats;
pub mod state;
pub mod subset;
