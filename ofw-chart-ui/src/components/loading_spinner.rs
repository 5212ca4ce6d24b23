//! Full-page placeholder while the embedded extracts are parsed.

use dioxus::prelude::*;

/// Shown instead of the dashboard until the occurrence and current data
/// have been parsed out of the binary.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 48px 0; color: #5a6b7a;",
            div {
                style: "font-size: 22px; letter-spacing: 6px; color: #4aa8ff;",
                "~ ~ ~"
            }
            p {
                style: "margin: 10px 0 0 0; font-size: 13px;",
                "Loading sighting data..."
            }
        }
    }
}
