use dioxus::prelude::*;

use ui::SessionProvider;
use views::{AiIntro, Dashboard, Landing, Login, Profile, References, Register, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Public
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    // Protected, behind the session-gated shell
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/ai-intro")]
        AiIntro {},
        #[route("/references")]
        References {},
    #[end_layout]

    // Fallback
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Remote API address; defaults to a same-origin `/api` prefix.
fn api_base_url() -> String {
    option_env!("RENTME_API_URL")
        .unwrap_or(api::DEFAULT_BASE_URL)
        .to_string()
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider { base_url: api_base_url(),
            Router::<Route> {}
        }
    }
}

/// Unmatched paths land back on the entry screen.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Landing {});
    rsx! {}
}
