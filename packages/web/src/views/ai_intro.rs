//! AI introduction screen: pick a tone, generate, keep or discard the results.

use api::{Intro, Tone};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormError};
use ui::use_session;

#[component]
pub fn AiIntro() -> Element {
    let ctx = use_session();
    let api = ctx.api();

    let mut intros = use_signal(|| Option::<Vec<Intro>>::None);
    let mut tone = use_signal(|| Tone::Professional);
    let mut generating = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // The server returns intros newest-first; local edits keep that order.
    let fetch_api = api.clone();
    use_future(move || {
        let api = fetch_api.clone();
        async move {
            match api.intros().await {
                Ok(list) => intros.set(Some(list)),
                Err(err) => {
                    tracing::warn!("failed to load introductions: {err}");
                    intros.set(Some(Vec::new()));
                }
            }
        }
    });

    let generate_api = api.clone();
    let handle_generate = move |_| {
        let api = generate_api.clone();
        spawn(async move {
            error.set(None);
            generating.set(true);
            match api.generate_intro(tone()).await {
                Ok(intro) => {
                    intros.with_mut(|list| {
                        if let Some(list) = list {
                            list.insert(0, intro);
                        }
                    });
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            generating.set(false);
        });
    };

    rsx! {
        div { class: "screen",
            div { class: "screen-head",
                h1 { "AI introduction" }
                p { "A self-introduction written from your profile, in the tone you pick" }
            }

            div { class: "card",
                h3 { "Choose a tone" }
                div { class: "tone-grid",
                    for option in Tone::ALL {
                        button {
                            class: if tone() == option { "tone tone-selected" } else { "tone" },
                            onclick: move |_| tone.set(option),
                            p { class: "tone-label", "{option.label()}" }
                            p { class: "tone-desc", "{option.description()}" }
                        }
                    }
                }

                FormError { message: error() }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: generating(),
                    onclick: handle_generate,
                    if generating() { "Writing..." } else { "Generate introduction" }
                }
            }

            match intros() {
                None => rsx! {
                    div { class: "screen-loading", "Loading..." }
                },
                Some(list) if list.is_empty() => rsx! {
                    div { class: "card empty-state",
                        h3 { "Nothing here yet" }
                        p { "Generate your first introduction and share it with landlords." }
                    }
                },
                Some(list) => rsx! {
                    div { class: "intro-list",
                        for intro in list {
                            IntroCard {
                                key: "{intro.id}",
                                intro: intro.clone(),
                                on_delete: {
                                    let api = api.clone();
                                    move |id: String| {
                                        let api = api.clone();
                                        spawn(async move {
                                            match api.delete_intro(&id).await {
                                                Ok(()) => intros.with_mut(|list| {
                                                    if let Some(list) = list {
                                                        list.retain(|intro| intro.id != id);
                                                    }
                                                }),
                                                Err(err) => error.set(Some(err.to_string())),
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn IntroCard(intro: Intro, on_delete: EventHandler<String>) -> Element {
    let id = intro.id.clone();
    rsx! {
        div { class: "card intro",
            div { class: "intro-head",
                span { class: "badge badge-tone", "{intro.tone.label()}" }
                span { class: "intro-date", "{intro.created_at}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
            p { class: "intro-content", "{intro.content}" }
        }
    }
}
