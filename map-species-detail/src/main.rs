//! Species Detail with Environmental Overlay
//!
//! Per-species monthly view for three featured species: sighting locations
//! and centroid on the map, an environmental grid (temperature or salinity)
//! fetched from the subset API, and two line charts with the monthly means.
//!
//! The overlay fetch waits a fixed settle delay after each change so that
//! rapid slider scrubbing issues one request instead of twelve, and every
//! request carries a generation number so a slow stale response can never
//! overwrite a newer one.

use dioxus::prelude::*;
use ofw_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MonthSlider};
use ofw_chart_ui::state::AppState;
use ofw_chart_ui::{fetch, js_bridge};
use ofw_core::month_index::{subset_time_string, MONTH_LABELS};
use ofw_core::species_stats::SpeciesStats;
use ofw_core::subset::{SubsetError, SubsetGrid, SubsetParams, Variable};
use ofw_data::{bounds, color, geojson};

const SPECIES_STATS_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/whales_2011_top3_by_species_month.json"));

const MAP_ID: &str = "species-detail-map";
const TEMP_CHART_ID: &str = "monthly-temperature-chart";
const SAL_CHART_ID: &str = "monthly-salinity-chart";

/// Featured species: (scientific name, display name).
const FEATURED_SPECIES: [(&str, &str); 3] = [
    ("Balaenoptera physalus", "Fin Whale"),
    ("Balaenoptera acutorostrata", "Minke Whale"),
    ("Megaptera novaeangliae", "Humpback Whale"),
];

/// Delay between the last change and the overlay request.
const OVERLAY_SETTLE_MS: i32 = 700;

/// Spatial decimation for overlay grids; full resolution is too dense to
/// draw as circles.
const OVERLAY_STRIDE: u32 = 3;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("species-detail-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut stats: Signal<SpeciesStats> = use_signal(SpeciesStats::default);
    let selected: Signal<String> = use_signal(|| FEATURED_SPECIES[0].0.to_string());
    let variable: Signal<Variable> = use_signal(|| Variable::Thetao);
    let overlay_enabled: Signal<bool> = use_signal(|| true);
    // Monotonic request generation; stale overlay responses are discarded.
    let mut overlay_gen: Signal<u64> = use_signal(|| 0);

    // ─── Effect 1: One-time setup ───
    use_effect(move || {
        js_bridge::init_scripts();
        js_bridge::init_map(
            MAP_ID,
            &serde_json::json!({
                "center": [-10.0, 55.0],
                "zoom": 3.0,
                "popup": false,
                "whaleColor": color::DEFAULT_POINT_COLOR,
            }),
        );

        let mut state = state;
        match SpeciesStats::parse(SPECIES_STATS_JSON) {
            Ok(parsed) => stats.set(parsed),
            Err(e) => {
                log::error!("failed to parse species stats: {e:#}");
                state.error_msg.set(Some(format!("Could not load species data: {e}")));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Sightings and centroid for the selected month ───
    use_effect(move || {
        if *state.loading.read() {
            return;
        }
        let species = selected.read().clone();
        let month0 = state.view.read().time_index.min(11);

        let stats_ref = stats.read();
        let month = stats_ref.month(&species, month0);

        let points = month.map(|m| m.occurrences.as_slice()).unwrap_or(&[]);
        js_bridge::set_whale_data(&geojson::points_to_geojson(points));

        if let Some(centroid) = month.and_then(|m| m.centroid) {
            js_bridge::fly_to(centroid.lon, centroid.lat, 4.0);
        }
    });

    // ─── Effect 3: Environmental overlay fetch ───
    use_effect(move || {
        let species = selected.read().clone();
        let month0 = state.view.read().time_index.min(11);
        let var = *variable.read();

        if !*overlay_enabled.read() {
            js_bridge::clear_env_overlay();
            return;
        }

        let generation = *overlay_gen.peek() + 1;
        overlay_gen.set(generation);

        let mut state = state;
        spawn(async move {
            // Let slider scrubbing and map movement settle first.
            fetch::pause_ms(OVERLAY_SETTLE_MS).await;
            if *overlay_gen.peek() != generation {
                return;
            }

            let centroid = stats
                .peek()
                .month(&species, month0)
                .and_then(|m| m.centroid);
            let request_bounds =
                bounds::resolve_overlay_bounds(js_bridge::viewport_bounds(), centroid);

            let params = match var {
                Variable::Thetao => SubsetParams::temperature(request_bounds),
                Variable::So => SubsetParams::salinity(request_bounds),
            }
            .with_time(subset_time_string(month0))
            .with_depth(0.0)
            .with_stride(OVERLAY_STRIDE);

            let result = fetch::fetch_subset_grid(&params).await;
            let stale = *overlay_gen.peek() != generation;
            match resolve_overlay_response(result, var, stale) {
                OverlayUpdate::Ignore => {
                    log::info!("discarding stale overlay response");
                }
                OverlayUpdate::Clear => {
                    state.error_msg.set(None);
                    js_bridge::clear_env_overlay();
                }
                OverlayUpdate::Draw { geojson, paint } => {
                    state.error_msg.set(None);
                    js_bridge::set_env_overlay(&geojson, &paint);
                }
                OverlayUpdate::Fail(msg) => {
                    log::error!("overlay request failed: {msg}");
                    state.error_msg.set(Some(msg));
                }
            }
        });
    });

    // ─── Effect 4: Monthly mean line charts ───
    use_effect(move || {
        if *state.loading.read() {
            return;
        }
        let species = selected.read().clone();
        let stats_ref = stats.read();

        let chart_data = |values: [f64; 12]| -> String {
            let points: Vec<serde_json::Value> = MONTH_LABELS
                .iter()
                .zip(values)
                .map(|(label, value)| serde_json::json!({ "label": label, "value": value }))
                .collect();
            serde_json::to_string(&points).unwrap_or_default()
        };

        js_bridge::render_line_chart(
            TEMP_CHART_ID,
            &chart_data(stats_ref.monthly_temperatures(&species)),
            &serde_json::json!({ "color": "#e0642c", "markerIndex": state.view.peek().time_index })
                .to_string(),
        );
        js_bridge::render_line_chart(
            SAL_CHART_ID,
            &chart_data(stats_ref.monthly_salinities(&species)),
            &serde_json::json!({ "color": "#2166ac", "markerIndex": state.view.peek().time_index })
                .to_string(),
        );
    });

    // ─── Effect 5: Month marker follows the slider ───
    use_effect(move || {
        let idx = state.view.read().time_index.min(11) as i32;
        js_bridge::set_month_marker(TEMP_CHART_ID, idx);
        js_bridge::set_month_marker(SAL_CHART_ID, idx);
    });

    let month0 = state.view.read().time_index.min(11);
    let month_label = MONTH_LABELS[month0].to_string();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "Species Detail".to_string(),
                    subtitle: "Monthly sightings, centroid, and environmental conditions (2011)".to_string(),
                }

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
                    FeaturedSpeciesSelector { selected }
                    OverlayControls { variable, enabled: overlay_enabled }
                }

                MonthSlider { max: 11, label: month_label, show_play: false }

                div {
                    id: "{MAP_ID}",
                    style: "width: 100%; height: 440px; border-radius: 4px;",
                }

                div {
                    style: "display: flex; gap: 24px; flex-wrap: wrap; margin-top: 16px;",
                    div {
                        style: "flex: 1; min-width: 360px;",
                        ChartHeader {
                            title: "Mean Surface Temperature".to_string(),
                            subtitle: "Monthly mean over sighting locations (degrees C)".to_string(),
                        }
                        ChartContainer { id: TEMP_CHART_ID.to_string(), min_height: 200 }
                    }
                    div {
                        style: "flex: 1; min-width: 360px;",
                        ChartHeader {
                            title: "Mean Surface Salinity".to_string(),
                            subtitle: "Monthly mean over sighting locations (PSU)".to_string(),
                        }
                        ChartContainer { id: SAL_CHART_ID.to_string(), min_height: 200 }
                    }
                }
            }
        }
    }
}

/// What the UI should do with a finished overlay request.
#[derive(Debug)]
enum OverlayUpdate {
    /// A newer request superseded this one; touch nothing.
    Ignore,
    /// The grid held no usable cells; remove any drawn overlay.
    Clear,
    /// Draw the grid with the given paint expression.
    Draw {
        geojson: serde_json::Value,
        paint: serde_json::Value,
    },
    /// A current request failed; surface the message.
    Fail(String),
}

/// Decides the outcome of an overlay response. Stale responses are ignored
/// whether they succeeded or failed, so a slow dead request can neither
/// repaint the map nor raise an error over a newer result.
fn resolve_overlay_response(
    result: Result<SubsetGrid, SubsetError>,
    variable: Variable,
    stale: bool,
) -> OverlayUpdate {
    if stale {
        return OverlayUpdate::Ignore;
    }
    match result {
        Ok(grid) => match geojson::grid_min_max(&grid) {
            Some((min, max)) => OverlayUpdate::Draw {
                geojson: geojson::grid_to_geojson(&grid),
                paint: color::env_paint_expression(min, max, variable),
            },
            None => OverlayUpdate::Clear,
        },
        Err(e) => OverlayUpdate::Fail(format!("Environmental overlay unavailable: {e}")),
    }
}

/// Dropdown limited to the three featured species.
#[component]
fn FeaturedSpeciesSelector(selected: Signal<String>) -> Element {
    let mut selected = selected;
    let current = selected.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "featured-species-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Species: "
            }
            select {
                id: "featured-species-select",
                onchange: move |evt: Event<FormData>| selected.set(evt.value()),
                for (scientific, display) in FEATURED_SPECIES {
                    option {
                        value: "{scientific}",
                        selected: scientific == current,
                        "{display} ({scientific})"
                    }
                }
            }
        }
    }
}

/// Variable picker and on/off toggle for the environmental overlay.
#[component]
fn OverlayControls(variable: Signal<Variable>, enabled: Signal<bool>) -> Element {
    let mut variable = variable;
    let mut enabled = enabled;
    let current = *variable.read();
    let is_on = *enabled.read();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                input {
                    r#type: "checkbox",
                    checked: is_on,
                    onchange: move |_| enabled.set(!is_on),
                }
                " Environmental overlay"
            }
            select {
                disabled: !is_on,
                onchange: move |evt: Event<FormData>| {
                    variable.set(match evt.value().as_str() {
                        "so" => Variable::So,
                        _ => Variable::Thetao,
                    });
                },
                option {
                    value: "thetao",
                    selected: current == Variable::Thetao,
                    "Temperature"
                }
                option {
                    value: "so",
                    selected: current == Variable::So,
                    "Salinity"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ofw_core::subset::GridCoords;

    fn one_cell_grid(value: f64) -> SubsetGrid {
        SubsetGrid {
            coords: GridCoords {
                latitude: vec![55.0, 56.0],
                longitude: vec![-10.0],
            },
            data: vec![vec![Some(value)], vec![Some(value + 1.0)]],
        }
    }

    fn timeout_error() -> SubsetError {
        SubsetError::Decode("request timed out".to_string())
    }

    #[test]
    fn current_grid_is_drawn() {
        let update = resolve_overlay_response(Ok(one_cell_grid(9.5)), Variable::Thetao, false);
        match update {
            OverlayUpdate::Draw { geojson, paint } => {
                assert_eq!(geojson["type"], "FeatureCollection");
                assert_eq!(paint[0], "interpolate");
            }
            other => panic!("expected Draw, got {other:?}"),
        }
    }

    #[test]
    fn all_null_grid_clears_the_overlay() {
        let grid = SubsetGrid {
            coords: GridCoords {
                latitude: vec![55.0],
                longitude: vec![-10.0],
            },
            data: vec![vec![None]],
        };
        assert!(matches!(
            resolve_overlay_response(Ok(grid), Variable::So, false),
            OverlayUpdate::Clear
        ));
    }

    #[test]
    fn current_failure_surfaces_a_message() {
        match resolve_overlay_response(Err(timeout_error()), Variable::Thetao, false) {
            OverlayUpdate::Fail(msg) => {
                assert!(msg.starts_with("Environmental overlay unavailable"));
            }
            other => panic!("expected Fail, got {other:?}"),
        }
    }

    #[test]
    fn stale_responses_are_ignored_even_on_failure() {
        // A request that dies slowly must not raise an error once a newer
        // request has already settled the UI.
        assert!(matches!(
            resolve_overlay_response(Err(timeout_error()), Variable::Thetao, true),
            OverlayUpdate::Ignore
        ));
        assert!(matches!(
            resolve_overlay_response(Ok(one_cell_grid(9.5)), Variable::Thetao, true),
            OverlayUpdate::Ignore
        ));
    }
}
