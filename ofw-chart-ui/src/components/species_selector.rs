//! Dropdown selector for filtering by species.

use crate::state::AppState;
use dioxus::prelude::*;
use ofw_core::state::{SpeciesFilter, ViewStatePatch};

/// Species dropdown selector.
/// Reads available species from AppState and patches the species filter
/// on change. "All" is the sentinel first option.
#[component]
pub fn SpeciesSelector() -> Element {
    let state = use_context::<AppState>();
    let options = state.species_options.read().clone();
    let selected = state.view.read().species.as_str().to_string();

    let on_change = move |evt: Event<FormData>| {
        state.apply(ViewStatePatch {
            species: Some(SpeciesFilter::parse(&evt.value())),
            ..Default::default()
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "species-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Species: "
            }
            select {
                id: "species-select",
                onchange: on_change,
                option {
                    value: "All",
                    selected: selected == "All",
                    "All species"
                }
                for species in options.iter() {
                    option {
                        value: "{species}",
                        selected: *species == selected,
                        "{species}"
                    }
                }
            }
        }
    }
}
