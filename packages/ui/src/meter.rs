//! Trust-score display widgets.

use dioxus::prelude::*;

/// Labeled progress bar used for the trust-score breakdown.
#[component]
pub fn ScoreBar(
    label: String,
    percent: u8,
    #[props(default = "".to_string())] class: String,
) -> Element {
    rsx! {
        div { class: "score-bar",
            div { class: "score-bar-head",
                span { class: "score-bar-label", "{label}" }
                span { class: "score-bar-value", "{percent}%" }
            }
            div { class: "score-bar-track",
                div {
                    class: "score-bar-fill {class}",
                    style: "width: {percent}%;",
                }
            }
        }
    }
}

/// The circled 0-100 trust score. Server-computed; displayed as-is.
#[component]
pub fn TrustScoreRing(score: u8) -> Element {
    rsx! {
        div { class: "trust-ring",
            div { class: "trust-ring-score", "{score}" }
            div { class: "trust-ring-max", "/ 100" }
        }
    }
}
