//! Checkboxes for toggling map layers.

use crate::state::AppState;
use dioxus::prelude::*;
use ofw_core::state::ViewStatePatch;

/// Layer visibility toggles for the whale and currents layers.
#[component]
pub fn LayerToggles() -> Element {
    let state = use_context::<AppState>();
    let view = state.view.read().clone();

    let show_whales = view.show_whales;
    let on_whales = move |_| {
        state.apply(ViewStatePatch {
            show_whales: Some(!show_whales),
            ..Default::default()
        });
    };

    let show_currents = view.show_currents;
    let on_currents = move |_| {
        state.apply(ViewStatePatch {
            show_currents: Some(!show_currents),
            ..Default::default()
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
            label {
                style: "font-weight: bold;",
                input {
                    r#type: "checkbox",
                    checked: show_whales,
                    onchange: on_whales,
                }
                " Whale sightings"
            }
            label {
                style: "font-weight: bold;",
                input {
                    r#type: "checkbox",
                    checked: show_currents,
                    onchange: on_currents,
                }
                " Vertical flow"
            }
        }
    }
}
