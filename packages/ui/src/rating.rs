//! Five-star rating display.

use dioxus::prelude::*;

/// Read-only star row for a 1-5 landlord rating.
#[component]
pub fn StarRating(rating: u8) -> Element {
    rsx! {
        span { class: "stars",
            for i in 0..5u8 {
                span {
                    class: if i < rating { "star star-filled" } else { "star" },
                    "★"
                }
            }
        }
    }
}
