//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormError, Input};
use ui::use_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let ctx = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let loading = ctx.current().is_loading;

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let mut ctx = ctx.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(message) = session::forms::validate_login(&e, &p) {
                error.set(Some(message));
                return;
            }

            match ctx.login(&e, &p).await {
                Ok(()) => {
                    nav.push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card card",
                h1 {
                    "Rent"
                    span { class: "accent", "Me" }
                }
                p { class: "auth-subtitle", "Sign in to your account" }

                form { class: "auth-form", onsubmit: handle_login,
                    FormError { message: error() }

                    Input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
