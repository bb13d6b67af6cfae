//! Registration page view.

use api::NewAccount;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormError, Input};
use ui::use_session;

use crate::views::non_empty;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let ctx = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let loading = ctx.current().is_loading;

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let mut ctx = ctx.clone();
        spawn(async move {
            error.set(None);

            let account = NewAccount {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                phone: non_empty(phone()),
            };
            // Checked before any request leaves the client.
            if let Err(message) = session::forms::validate_registration(&account, &confirm_password())
            {
                error.set(Some(message));
                return;
            }

            match ctx.register(&account).await {
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
                p { class: "auth-subtitle", "Create your free trust profile" }

                form { class: "auth-form", onsubmit: handle_register,
                    FormError { message: error() }

                    Input {
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                    Input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Input {
                        r#type: "tel",
                        placeholder: "Phone (optional)",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                    Input {
                        r#type: "password",
                        placeholder: "Password (min 6 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    Input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Creating account..." } else { "Sign up" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
