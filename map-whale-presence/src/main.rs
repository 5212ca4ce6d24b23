//! Regional Whale Presence
//!
//! One region at a time (Europe or the North Atlantic): every sighting in
//! the region on the map, colored per species, with a species checklist
//! showing occurrence counts. An empty checklist selection shows all
//! species; selecting species narrows both the points and the colors.
//! Switching region clears the selection and refits the camera.

use std::collections::HashSet;

use dioxus::prelude::*;
use ofw_chart_ui::components::{ChartHeader, ErrorDisplay, LoadingSpinner};
use ofw_chart_ui::js_bridge;
use ofw_chart_ui::state::AppState;
use ofw_core::regions::{RegionData, REGION_NAMES};
use ofw_data::{bounds, color, geojson};

const REGIONS_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/whales_2011_by_region.json"));

const MAP_ID: &str = "presence-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("whale-presence-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut regions: Signal<RegionData> = use_signal(RegionData::default);
    let region: Signal<String> = use_signal(|| REGION_NAMES[0].to_string());
    let mut selected_species: Signal<HashSet<String>> = use_signal(HashSet::new);

    // ─── Effect 1: One-time setup ───
    use_effect(move || {
        js_bridge::init_scripts();
        js_bridge::init_map(
            MAP_ID,
            &serde_json::json!({
                "center": [-10.0, 52.0],
                "zoom": 2.8,
                "popup": true,
                "whaleRadius": 5,
            }),
        );

        let mut state = state;
        match RegionData::parse(REGIONS_JSON) {
            Ok(parsed) => regions.set(parsed),
            Err(e) => {
                log::error!("failed to parse region data: {e:#}");
                state.error_msg.set(Some(format!("Could not load region data: {e}")));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Region change clears the selection and refits ───
    use_effect(move || {
        let name = region.read().clone();
        selected_species.set(HashSet::new());
        if let Some(fit) = bounds::fit_bounds(regions.read().by_name(&name)) {
            js_bridge::fit_bounds(&fit);
        }
    });

    // ─── Effect 3: Push filtered sightings with per-species colors ───
    use_effect(move || {
        if *state.loading.read() {
            return;
        }
        let name = region.read().clone();
        let chosen = selected_species.read().clone();
        let regions_ref = regions.read();
        let all = regions_ref.by_name(&name);

        let shown: Vec<_> = if chosen.is_empty() {
            all.to_vec()
        } else {
            all.iter()
                .filter(|o| chosen.contains(&o.scientific_name))
                .cloned()
                .collect()
        };

        js_bridge::set_whale_data(&geojson::region_to_geojson(&shown));

        let mut palette: Vec<String> = shown.iter().map(|o| o.scientific_name.clone()).collect();
        palette.sort();
        palette.dedup();
        js_bridge::set_circle_paint(
            "whales",
            "circle-color",
            &color::species_match_expression(&palette),
        );
    });

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
                    title: "Regional Whale Presence".to_string(),
                    subtitle: "2011 sightings by region; colors are stable per species".to_string(),
                }

                RegionSelector { region }

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    div {
                        id: "{MAP_ID}",
                        style: "flex: 3; min-width: 480px; height: 500px; border-radius: 4px;",
                    }
                    SpeciesChecklist { regions, region, selected_species }
                }
            }
        }
    }
}

/// Dropdown over the two shipped regions.
#[component]
fn RegionSelector(region: Signal<String>) -> Element {
    let mut region = region;
    let current = region.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Region: "
            }
            select {
                id: "region-select",
                onchange: move |evt: Event<FormData>| region.set(evt.value()),
                for name in REGION_NAMES {
                    option {
                        value: "{name}",
                        selected: name == current,
                        "{name}"
                    }
                }
            }
        }
    }
}

/// Checklist of the region's species with occurrence counts. Checking
/// nothing shows every species.
#[component]
fn SpeciesChecklist(
    regions: Signal<RegionData>,
    region: Signal<String>,
    selected_species: Signal<HashSet<String>>,
) -> Element {
    let mut selected_species = selected_species;
    let mut search: Signal<String> = use_signal(String::new);
    let name = region.read().clone();
    let counts = regions.read().species_counts(&name);
    let species_total = counts.len();
    let needle = search.read().to_lowercase();
    let shown: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(species, _)| needle.is_empty() || species.to_lowercase().contains(&needle))
        .collect();
    let chosen = selected_species.read().clone();

    rsx! {
        div {
            style: "flex: 1; min-width: 260px; max-height: 500px; overflow-y: auto; border: 1px solid #e0e0e0; border-radius: 4px; padding: 8px;",
            p {
                style: "margin: 0 0 8px 0; font-weight: bold;",
                "Species ({species_total})"
            }
            input {
                r#type: "search",
                placeholder: "Filter species...",
                value: "{search}",
                style: "width: 100%; margin-bottom: 8px; box-sizing: border-box;",
                oninput: move |evt: Event<FormData>| search.set(evt.value()),
            }
            for (species, count) in shown {
                label {
                    key: "{species}",
                    style: "display: flex; align-items: center; gap: 6px; font-size: 13px; margin: 2px 0;",
                    input {
                        r#type: "checkbox",
                        checked: chosen.contains(&species),
                        onchange: {
                            let species = species.clone();
                            move |_| {
                                selected_species.with_mut(|set| {
                                    if !set.remove(&species) {
                                        set.insert(species.clone());
                                    }
                                });
                            }
                        },
                    }
                    span {
                        style: "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {color::species_color(&species)};",
                    }
                    "{species} ({count})"
                }
            }
        }
    }
}
