//! Session-gated layout for the protected screens.
//!
//! Evaluated on every navigation: an unauthenticated session is redirected to
//! the login screen with a history-replacing navigation, so the blocked
//! screen cannot be reached through back-navigation. Authenticated sessions
//! get the sidebar shell around the routed screen.

use dioxus::prelude::*;
use session::guard::{self, Decision, Gate};
use ui::use_session;

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let mut ctx = use_session();
    let nav = use_navigator();
    let state = ctx.current();

    if guard::evaluate(Gate::Protected, &state) == Decision::RedirectToLogin {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let user_name = state
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "User".to_string());
    let user_email = state
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();
    let initial = user_name.chars().next().unwrap_or('U');

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    h1 {
                        "Rent"
                        span { class: "accent", "Me" }
                    }
                    p { "Tenant trust profile" }
                }

                nav { class: "sidebar-nav",
                    Link { class: "nav-link", active_class: "active", to: Route::Dashboard {}, "Dashboard" }
                    Link { class: "nav-link", active_class: "active", to: Route::Profile {}, "My profile" }
                    Link { class: "nav-link", active_class: "active", to: Route::References {}, "References" }
                    Link { class: "nav-link", active_class: "active", to: Route::AiIntro {}, "AI introduction" }
                }

                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        div { class: "avatar", "{initial}" }
                        div { class: "sidebar-user-meta",
                            p { class: "name", "{user_name}" }
                            p { class: "email", "{user_email}" }
                        }
                    }
                    button {
                        class: "btn btn-ghost logout",
                        onclick: move |_| {
                            ctx.logout();
                            nav.push(Route::Login {});
                        },
                        "Log out"
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
