//! Status badge for reference records.

use api::ReferenceStatus;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(status: ReferenceStatus) -> Element {
    let class = match status {
        ReferenceStatus::Pending => "badge badge-pending",
        ReferenceStatus::Completed => "badge badge-completed",
        ReferenceStatus::Declined => "badge badge-declined",
    };
    rsx! {
        span { class: "{class}", "{status.label()}" }
    }
}
