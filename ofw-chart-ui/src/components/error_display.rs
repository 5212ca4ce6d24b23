//! Error banner for failed loads and overlay requests.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Banner shown above the map when a dataset or the subset API fails.
/// The affected layer stays empty; everything else keeps working.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; gap: 8px; align-items: baseline; padding: 10px 14px; margin: 8px 0; background: #fff4f2; color: #9c2b1d; border-left: 4px solid #d6604d; border-radius: 2px; font-size: 14px;",
            strong { "Data problem:" }
            span { "{props.message}" }
        }
    }
}
