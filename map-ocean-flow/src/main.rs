//! Whale Sightings and Vertical Ocean Flow
//!
//! The flagship map: whale occurrences and ECCO vertical-flow samples on a
//! MapLibre map, driven by a shared monthly timeline with play/pause, plus
//! a seasonality line chart and a top-species bar chart.
//!
//! Data flow:
//! 1. `build.rs` copies the pre-computed extracts into OUT_DIR.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount: parse the currents JSON and the monthly counts CSV once.
//! 4. On range change: parse the matching occurrence GeoJSON and refresh
//!    the species dropdown.
//! 5. On any filter change: filter occurrences in Rust, push GeoJSON into
//!    the map source, and re-render the top-species bars.

use dioxus::prelude::*;
use ofw_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LayerToggles, LoadingSpinner, MonthSlider,
    RangeSelector, SpeciesSelector,
};
use ofw_chart_ui::state::AppState;
use ofw_chart_ui::{fetch, js_bridge};
use ofw_core::currents::CurrentsData;
use ofw_core::date_range::DateRange;
use ofw_core::month_index::format_month;
use ofw_core::occurrence::{self, WhaleOccurrence};
use ofw_core::seasonality::{self, SeasonalityPoint};
use ofw_core::state::{SpeciesFilter, ViewStatePatch};
use ofw_data::{aggregate, color, filter, geojson};

// Embed the pre-computed extracts at compile time.
const WHALES_2011_2012: &str =
    include_str!(concat!(env!("OUT_DIR"), "/whales_2011_2012.geojson"));
const WHALES_2010_2013: &str =
    include_str!(concat!(env!("OUT_DIR"), "/whales_2010_2013.geojson"));
const MONTHLY_COUNTS_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/whales_monthly_counts.csv"));
const FLOW_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/vertical_flow_w_surface.json"));

const MAP_ID: &str = "flow-map";
const SEASONALITY_CHART_ID: &str = "seasonality-chart";
const TOP_SPECIES_CHART_ID: &str = "top-species-chart";

/// Timeline tick interval while playing.
const PLAY_TICK_MS: i32 = 900;

/// Named camera bookmarks: (label, lon, lat, zoom).
const BOOKMARKS: [(&str, f64, f64, f64); 5] = [
    ("Mediterranean", 15.0, 35.0, 4.0),
    ("Bay of Biscay", -5.0, 45.0, 5.0),
    ("Norwegian Sea", 10.0, 65.0, 4.5),
    ("North Sea", 3.0, 56.0, 5.0),
    ("Iceland", -20.0, 65.0, 4.5),
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("ocean-flow-root"))
        .launch(App);
}

fn occurrence_text(range: DateRange) -> &'static str {
    match range {
        DateRange::Y2011_2012 => WHALES_2011_2012,
        DateRange::Y2010_2013 => WHALES_2010_2013,
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut occurrences: Signal<Vec<WhaleOccurrence>> = use_signal(Vec::new);
    let mut currents: Signal<CurrentsData> = use_signal(CurrentsData::default);
    let mut seasonality: Signal<Vec<SeasonalityPoint>> = use_signal(Vec::new);

    // ─── Effect 1: One-time setup ───
    use_effect(move || {
        js_bridge::init_scripts();
        js_bridge::init_map(
            MAP_ID,
            &serde_json::json!({
                "center": [-5.0, 50.0],
                "zoom": 3.2,
                "popup": true,
                "whaleColor": color::DEFAULT_POINT_COLOR,
            }),
        );

        match CurrentsData::parse(FLOW_JSON) {
            Ok(data) => currents.set(data),
            Err(e) => log::error!("failed to parse flow data: {e:#}"),
        }
        seasonality.set(seasonality::parse_monthly_counts(MONTHLY_COUNTS_CSV));

        let mut state = state;
        state.loading.set(false);
    });

    // ─── Effect 2: (Re)load occurrences when the date range changes ───
    use_effect(move || {
        let range = state.view.read().range;
        let mut state = state;
        match occurrence::parse_geojson(occurrence_text(range)) {
            Ok(data) => {
                let options = occurrence::species_options(&data);
                // The previous selection may not exist in the new dataset.
                let selected = state.view.peek().species.clone();
                if let SpeciesFilter::One(name) = &selected {
                    if !options.contains(name) {
                        state.apply(ViewStatePatch {
                            species: Some(SpeciesFilter::All),
                            ..Default::default()
                        });
                    }
                }
                state.species_options.set(options);
                occurrences.set(data);
                state.error_msg.set(None);
            }
            Err(e) => {
                log::error!("failed to parse occurrences: {e:#}");
                state.error_msg.set(Some(format!("Could not load sighting data: {e}")));
            }
        }
    });

    // ─── Effect 3: Filter occurrences and push to the map + bar chart ───
    use_effect(move || {
        if *state.loading.read() {
            return;
        }
        let view = state.view.read().clone();
        let data = occurrences.read().clone();

        let filtered = filter::filter_occurrences(&data, &view);
        js_bridge::set_whale_data(&geojson::occurrences_to_geojson(&filtered));
        js_bridge::set_layer_visibility("whales", view.show_whales);

        // Stable per-species point colors; "Unknown" falls to the default.
        let options = state.species_options.read().clone();
        js_bridge::set_circle_paint(
            "whales",
            "circle-color",
            &color::species_match_expression(&options),
        );

        let top = aggregate::top_species(&filtered);
        let bar_data: Vec<serde_json::Value> = top
            .iter()
            .map(|s| {
                serde_json::json!({
                    "label": s.species,
                    "value": s.count,
                    "color": color::species_color(&s.species),
                })
            })
            .collect();
        js_bridge::render_bar_chart(
            TOP_SPECIES_CHART_ID,
            &serde_json::to_string(&bar_data).unwrap_or_default(),
            &serde_json::json!({ "height": 240 }).to_string(),
        );
    });

    // ─── Effect 4: Push the current month's flow samples ───
    use_effect(move || {
        let view = state.view.read().clone();
        let step = geojson::currents_to_geojson(currents.read().step_at(view.time_index));
        js_bridge::set_currents_data(&step);
        js_bridge::set_layer_visibility("currents", view.show_currents);
    });

    // ─── Effect 5: Seasonality line chart (rendered once per data load) ───
    use_effect(move || {
        if *state.loading.read() {
            return;
        }
        let points = seasonality.read().clone();
        if points.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|p| serde_json::json!({ "label": p.label, "value": p.count }))
            .collect();
        js_bridge::render_line_chart(
            SEASONALITY_CHART_ID,
            &serde_json::to_string(&data).unwrap_or_default(),
            &serde_json::json!({
                "color": "#4ca0e0",
                "markerIndex": state.view.peek().time_index,
            })
            .to_string(),
        );
    });

    // ─── Effect 6: Month marker follows the timeline ───
    use_effect(move || {
        let idx = state.view.read().time_index;
        js_bridge::set_month_marker(SEASONALITY_CHART_ID, idx as i32);
    });

    // ─── Effect 7: Play loop ───
    // Every run can schedule a tick; the stale ones become no-ops because
    // the timeline already moved past their captured position.
    use_effect(move || {
        let view = state.view.read().clone();
        if !view.playing {
            return;
        }
        let captured = view.time_index;
        spawn(async move {
            fetch::pause_ms(PLAY_TICK_MS).await;
            let current = state.view.peek().clone();
            if current.playing && current.time_index == captured {
                state.apply(ViewStatePatch {
                    time_index: Some(current.next_time_index()),
                    ..Default::default()
                });
            }
        });
    });

    let month_label = format_month(state.view.read().time_index as i32);

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
                    title: "Whale Sightings and Vertical Ocean Flow".to_string(),
                    subtitle: "OBIS occurrences with ECCO surface vertical velocity (w)".to_string(),
                }

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
                    SpeciesSelector {}
                    RangeSelector {}
                    LayerToggles {}
                }

                MonthSlider { label: month_label }

                div {
                    id: "{MAP_ID}",
                    style: "width: 100%; height: 480px; border-radius: 4px;",
                }

                BookmarkBar {}

                div {
                    style: "display: flex; gap: 24px; flex-wrap: wrap; margin-top: 16px;",
                    div {
                        style: "flex: 1; min-width: 360px;",
                        ChartHeader {
                            title: "Seasonality".to_string(),
                            subtitle: "Total sightings per month".to_string(),
                        }
                        ChartContainer { id: SEASONALITY_CHART_ID.to_string(), min_height: 200 }
                    }
                    div {
                        style: "flex: 1; min-width: 360px;",
                        ChartHeader {
                            title: "Top Species".to_string(),
                            subtitle: "Most sighted species under the current filters".to_string(),
                        }
                        ChartContainer { id: TOP_SPECIES_CHART_ID.to_string(), min_height: 260 }
                    }
                }
            }
        }
    }
}

/// Row of camera bookmark buttons.
#[component]
fn BookmarkBar() -> Element {
    rsx! {
        div {
            style: "margin-top: 8px; display: flex; gap: 8px; flex-wrap: wrap;",
            for (name, lon, lat, zoom) in BOOKMARKS {
                button {
                    style: "font-size: 12px; padding: 4px 10px;",
                    onclick: move |_| js_bridge::fly_to(lon, lat, zoom),
                    "{name}"
                }
            }
        }
    }
}
