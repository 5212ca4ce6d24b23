//! Bordered panel that D3 charts render into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the chart bridge renders into.
    pub id: String,
    /// Show the overlay until the first render lands.
    #[props(default = false)]
    pub loading: bool,
    /// Reserved height, so the page does not jump when the chart appears.
    #[props(default = 260)]
    pub min_height: u32,
}

fn panel_style(min_height: u32) -> String {
    format!(
        "min-height: {min_height}px; position: relative; width: 100%; \
         border: 1px solid #e4e9ee; border-radius: 4px; padding: 4px; box-sizing: border-box;"
    )
}

/// Panel wrapping one chart. The inner div carries the id the JS bridge
/// polls for; the panel reserves space and hosts the loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = panel_style(props.min_height);

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #5a6b7a; font-size: 13px;",
                    "Rendering chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
