//! Timeline slider with a play/pause toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use ofw_core::state::ViewStatePatch;

#[derive(Props, Clone, PartialEq)]
pub struct MonthSliderProps {
    /// Highest slider position, inclusive (23 for the two-year timeline,
    /// 11 when the timeline is a single calendar year).
    #[props(default = ofw_core::month_index::MONTH_COUNT - 1)]
    pub max: usize,
    /// Human-readable label for the current position.
    pub label: String,
    /// Hide the play/pause button (detail views drive the slider by hand).
    #[props(default = true)]
    pub show_play: bool,
}

/// Range slider over the month timeline. Dragging patches `time_index`;
/// the play button toggles the host app's animation loop.
#[component]
pub fn MonthSlider(props: MonthSliderProps) -> Element {
    let state = use_context::<AppState>();
    let view = state.view.read().clone();

    let on_slide = move |evt: Event<FormData>| {
        if let Ok(idx) = evt.value().parse::<usize>() {
            state.apply(ViewStatePatch {
                time_index: Some(idx),
                ..Default::default()
            });
        }
    };

    let playing = view.playing;
    let on_play = move |_| {
        state.apply(ViewStatePatch {
            playing: Some(!playing),
            ..Default::default()
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            if props.show_play {
                button {
                    style: "min-width: 64px;",
                    onclick: on_play,
                    if playing { "Pause" } else { "Play" }
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "{props.max}",
                value: "{view.time_index}",
                style: "flex: 1;",
                oninput: on_slide,
            }
            span {
                style: "min-width: 110px; font-weight: bold;",
                "{props.label}"
            }
        }
    }
}
