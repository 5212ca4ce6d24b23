//! Reusable Dioxus RSX components for the ocean-flow map apps.

mod chart_container;
mod chart_header;
mod error_display;
mod layer_toggles;
mod loading_spinner;
mod month_slider;
mod range_selector;
mod species_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use layer_toggles::LayerToggles;
pub use loading_spinner::LoadingSpinner;
pub use month_slider::MonthSlider;
pub use range_selector::RangeSelector;
pub use species_selector::SpeciesSelector;
