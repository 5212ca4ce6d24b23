//! Dropdown selector for the sighting dataset date range.

use crate::state::AppState;
use dioxus::prelude::*;
use ofw_core::date_range::DateRange;
use ofw_core::state::ViewStatePatch;

/// Dropdown selector for the occurrence date range.
/// Switching range triggers a dataset reload in the host app.
#[component]
pub fn RangeSelector() -> Element {
    let state = use_context::<AppState>();
    let current = state.view.read().range;

    let on_change = move |evt: Event<FormData>| {
        state.apply(ViewStatePatch {
            range: Some(DateRange::parse(&evt.value())),
            ..Default::default()
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "range-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Date range: "
            }
            select {
                id: "range-select",
                onchange: on_change,
                option {
                    value: "{DateRange::Y2011_2012.as_str()}",
                    selected: current == DateRange::Y2011_2012,
                    "2011 - 2012"
                }
                option {
                    value: "{DateRange::Y2010_2013.as_str()}",
                    selected: current == DateRange::Y2010_2013,
                    "2010 - 2013"
                }
            }
        }
    }
}
