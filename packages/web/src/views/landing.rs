//! Public entry screen.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Product pitch. Logged-in visitors get a dashboard shortcut instead of the
/// sign-up forms; the screen stays reachable either way.
#[component]
pub fn Landing() -> Element {
    let ctx = use_session();
    let state = ctx.current();

    rsx! {
        div { class: "landing",
            div { class: "landing-hero",
                h1 {
                    "Prove you are a great tenant with "
                    span { class: "accent", "RentMe" }
                }
                p { class: "landing-tagline",
                    "Build a verified trust profile, collect landlord references, "
                    "and let AI write your introduction."
                }

                if state.is_authenticated {
                    Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to dashboard" }
                } else {
                    div { class: "landing-cta",
                        Link { class: "btn btn-primary", to: Route::Register {}, "Create your trust profile" }
                        Link { class: "btn btn-secondary", to: Route::Login {}, "Sign in" }
                    }
                }
            }

            div { class: "landing-features",
                div { class: "card",
                    h3 { "Trust score" }
                    p { "One 0-100 score built from your verifications and profile." }
                }
                div { class: "card",
                    h3 { "Landlord references" }
                    p { "Ask previous landlords to vouch for you with a simple code." }
                }
                div { class: "card",
                    h3 { "AI introduction" }
                    p { "A tailored self-introduction in the tone you choose." }
                }
            }
        }
    }
}
