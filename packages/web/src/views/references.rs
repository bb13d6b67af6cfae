//! Landlord references: the list of requests and a modal to create one.

use api::{Reference, ReferenceRequest, ReferenceStatus};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormError, Input};
use ui::{use_session, StarRating, StatusBadge};

use crate::views::non_empty;

#[component]
pub fn References() -> Element {
    let ctx = use_session();
    let api = ctx.api();

    let list_api = api.clone();
    let mut references = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.references().await {
                Ok(references) => references,
                Err(err) => {
                    tracing::warn!("failed to load references: {err}");
                    Vec::new()
                }
            }
        }
    });

    let mut show_form = use_signal(|| false);
    let mut landlord_name = use_signal(String::new);
    let mut landlord_email = use_signal(String::new);
    let mut landlord_phone = use_signal(String::new);
    let mut property_address = use_signal(String::new);
    let mut rental_period = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_request = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let name = landlord_name().trim().to_string();
            let address = property_address().trim().to_string();
            let period = rental_period().trim().to_string();
            if name.is_empty() || address.is_empty() || period.is_empty() {
                error.set(Some(
                    "Landlord name, property address and rental period are required".to_string(),
                ));
                return;
            }

            let request = ReferenceRequest {
                landlord_name: name,
                landlord_email: non_empty(landlord_email()),
                landlord_phone: non_empty(landlord_phone()),
                property_address: address,
                rental_period: period,
            };

            submitting.set(true);
            match api.request_reference(&request).await {
                Ok(_) => {
                    landlord_name.set(String::new());
                    landlord_email.set(String::new());
                    landlord_phone.set(String::new());
                    property_address.set(String::new());
                    rental_period.set(String::new());
                    show_form.set(false);
                    references.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "screen",
            div { class: "screen-head row",
                div {
                    h1 { "References" }
                    p { "Evaluations from your previous landlords" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        error.set(None);
                        show_form.set(true);
                    },
                    "Request a reference"
                }
            }

            if show_form() {
                div { class: "modal-backdrop", onclick: move |_| show_form.set(false),
                    div {
                        class: "modal card",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        h2 { "Request a reference" }
                        p { class: "modal-subtitle",
                            "We send the landlord a request code they use to submit their evaluation."
                        }

                        form { class: "modal-form", onsubmit: handle_request,
                            FormError { message: error() }

                            Input {
                                placeholder: "Landlord name",
                                value: landlord_name(),
                                oninput: move |evt: FormEvent| landlord_name.set(evt.value()),
                            }
                            Input {
                                r#type: "email",
                                placeholder: "Landlord email (optional)",
                                value: landlord_email(),
                                oninput: move |evt: FormEvent| landlord_email.set(evt.value()),
                            }
                            Input {
                                r#type: "tel",
                                placeholder: "Landlord phone (optional)",
                                value: landlord_phone(),
                                oninput: move |evt: FormEvent| landlord_phone.set(evt.value()),
                            }
                            Input {
                                placeholder: "Property address",
                                value: property_address(),
                                oninput: move |evt: FormEvent| property_address.set(evt.value()),
                            }
                            Input {
                                placeholder: "Rental period, e.g. 2022-2024",
                                value: rental_period(),
                                oninput: move |evt: FormEvent| rental_period.set(evt.value()),
                            }

                            div { class: "modal-actions",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| show_form.set(false),
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    r#type: "submit",
                                    disabled: submitting(),
                                    if submitting() { "Sending..." } else { "Send request" }
                                }
                            }
                        }
                    }
                }
            }

            match &*references.read_unchecked() {
                None => rsx! {
                    div { class: "screen-loading", "Loading..." }
                },
                Some(list) if list.is_empty() => rsx! {
                    div { class: "card empty-state",
                        h3 { "No references yet" }
                        p { "Ask a previous landlord to vouch for you. Completed references raise your trust score." }
                    }
                },
                Some(list) => rsx! {
                    div { class: "reference-list",
                        for reference in list.iter() {
                            ReferenceCard { reference: reference.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ReferenceCard(reference: Reference) -> Element {
    rsx! {
        div { class: "card reference",
            div { class: "reference-head",
                div {
                    h3 { "{reference.landlord_name}" }
                    p { class: "reference-address", "{reference.property_address}" }
                    p { class: "reference-period", "{reference.rental_period}" }
                }
                StatusBadge { status: reference.status }
            }

            if let Some(rating) = reference.rating {
                div { class: "reference-rating",
                    StarRating { rating }
                }
            }
            if let Some(comment) = &reference.comment {
                blockquote { class: "reference-comment", "\u{201c}{comment}\u{201d}" }
            }

            if reference.status == ReferenceStatus::Pending {
                if let Some(code) = &reference.request_code {
                    div { class: "request-code",
                        span { "Share this code with your landlord: " }
                        code { "{code}" }
                    }
                }
            }
        }
    }
}
