//! Dashboard: trust profile at a glance.

use api::{Reference, ReferenceStatus};
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let ctx = use_session();
    let state = ctx.current();
    let api = ctx.api();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let profile = match api.my_profile().await {
                Ok(profile) => Some(profile),
                Err(err) => {
                    tracing::warn!("failed to load profile: {err}");
                    None
                }
            };
            let references = match api.references().await {
                Ok(references) => references,
                Err(err) => {
                    tracing::warn!("failed to load references: {err}");
                    Vec::new()
                }
            };
            (profile, references)
        }
    });

    let user_name = state
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "there".to_string());

    match &*data.read_unchecked() {
        None => rsx! {
            div { class: "screen-loading", "Loading..." }
        },
        Some((profile, references)) => {
            let trust_score = profile.as_ref().map(|p| p.trust_score).unwrap_or(0);
            let completed = count_by_status(references, ReferenceStatus::Completed);
            let pending = count_by_status(references, ReferenceStatus::Pending);

            rsx! {
                div { class: "screen",
                    div { class: "screen-head",
                        h1 { "Hello, {user_name}!" }
                        p { "Here is where your trust profile stands" }
                    }

                    div { class: "stat-grid",
                        div { class: "card stat",
                            p { class: "stat-label", "Trust score" }
                            p { class: "stat-value accent", "{trust_score}" }
                            p { class: "stat-unit", "/ 100" }
                        }
                        div { class: "card stat",
                            p { class: "stat-label", "Completed references" }
                            p { class: "stat-value ok", "{completed}" }
                        }
                        div { class: "card stat",
                            p { class: "stat-label", "Pending references" }
                            p { class: "stat-value warn", "{pending}" }
                        }
                        div { class: "card stat",
                            p { class: "stat-label", "Profile completion" }
                            p { class: "stat-value", "{trust_score}%" }
                        }
                    }

                    h2 { "Quick start" }
                    div { class: "action-grid",
                        Link { class: "card action", to: Route::Profile {},
                            h3 { "Complete your profile" }
                            p { "Fill in the basics and get verified" }
                        }
                        Link { class: "card action", to: Route::References {},
                            h3 { "Request a reference" }
                            p { "Ask a previous landlord to vouch for you" }
                        }
                        Link { class: "card action", to: Route::AiIntro {},
                            h3 { "Generate an introduction" }
                            p { "A tailored self-introduction, written by AI" }
                        }
                    }

                    h2 { "Verification status" }
                    div { class: "card",
                        VerificationRow {
                            label: "Employment",
                            verified: profile.as_ref().map(|p| p.employment_verified).unwrap_or(false),
                        }
                        VerificationRow {
                            label: "Income",
                            verified: profile.as_ref().map(|p| p.income_verified).unwrap_or(false),
                        }
                        VerificationRow {
                            label: "Credit",
                            verified: profile.as_ref().map(|p| p.credit_verified).unwrap_or(false),
                        }
                    }
                }
            }
        }
    }
}

fn count_by_status(references: &[Reference], status: ReferenceStatus) -> usize {
    references.iter().filter(|r| r.status == status).count()
}

#[component]
fn VerificationRow(label: String, verified: bool) -> Element {
    rsx! {
        div { class: "verify-row",
            div { class: "verify-row-name",
                span { class: if verified { "dot dot-on" } else { "dot" } }
                span { "{label}" }
            }
            if verified {
                span { class: "verify-done", "Verified" }
            } else {
                Link { class: "verify-link", to: Route::Profile {}, "Verify now" }
            }
        }
    }
}
