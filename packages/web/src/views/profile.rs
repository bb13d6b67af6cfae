//! Profile screen: editable basics plus the verification side panel.

use api::{Profile as TrustProfile, ProfileUpdate};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormError, Input};
use ui::{use_session, ScoreBar, TrustScoreRing};

use crate::views::non_empty;

#[component]
pub fn Profile() -> Element {
    let ctx = use_session();
    let api = ctx.api();

    let mut profile = use_signal(|| Option::<TrustProfile>::None);
    let mut occupation = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut annual_income = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);

    // One fetch on mount; the form signals are seeded from the response and
    // owned by the inputs afterwards.
    let fetch_api = api.clone();
    use_future(move || {
        let api = fetch_api.clone();
        async move {
            match api.my_profile().await {
                Ok(fetched) => {
                    occupation.set(fetched.occupation.clone().unwrap_or_default());
                    company.set(fetched.company.clone().unwrap_or_default());
                    annual_income.set(
                        fetched
                            .annual_income
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    );
                    bio.set(fetched.bio.clone().unwrap_or_default());
                    profile.set(Some(fetched));
                }
                Err(err) => {
                    tracing::warn!("failed to load profile: {err}");
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    let save_api = api.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = save_api.clone();
        spawn(async move {
            error.set(None);
            saved.set(false);

            let income = match parse_income(&annual_income()) {
                Ok(income) => income,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let update = ProfileUpdate {
                occupation: non_empty(occupation()),
                company: non_empty(company()),
                annual_income: income,
                bio: non_empty(bio()),
            };

            saving.set(true);
            match api.update_profile(&update).await {
                Ok(fresh) => {
                    profile.set(Some(fresh));
                    saved.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    match profile() {
        None => rsx! {
            div { class: "screen-loading", "Loading..." }
        },
        Some(current) => rsx! {
            div { class: "screen",
                div { class: "screen-head",
                    h1 { "My profile" }
                    p { "What landlords see when you share your trust profile" }
                }

                div { class: "profile-grid",
                    form { class: "card profile-form", onsubmit: handle_save,
                        FormError { message: error() }
                        if saved() {
                            div { class: "form-ok", "Profile saved" }
                        }

                        label { class: "field",
                            span { "Occupation" }
                            Input {
                                placeholder: "e.g. Software engineer",
                                value: occupation(),
                                oninput: move |evt: FormEvent| occupation.set(evt.value()),
                            }
                        }
                        label { class: "field",
                            span { "Company" }
                            Input {
                                placeholder: "Where you work",
                                value: company(),
                                oninput: move |evt: FormEvent| company.set(evt.value()),
                            }
                        }
                        label { class: "field",
                            span { "Annual income" }
                            Input {
                                placeholder: "e.g. 52000",
                                value: annual_income(),
                                oninput: move |evt: FormEvent| annual_income.set(evt.value()),
                            }
                        }
                        label { class: "field",
                            span { "About you" }
                            textarea {
                                class: "input textarea",
                                rows: 4,
                                placeholder: "A few sentences about yourself as a tenant",
                                value: bio(),
                                oninput: move |evt: FormEvent| bio.set(evt.value()),
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save profile" }
                        }
                    }

                    div { class: "profile-side",
                        div { class: "card trust-card",
                            h3 { "Trust score" }
                            TrustScoreRing { score: current.trust_score }
                            ScoreBar {
                                label: "Verification",
                                percent: current.verification_percent(),
                                class: "fill-accent",
                            }
                            ScoreBar {
                                label: "Profile completion",
                                percent: current.trust_score,
                                class: "fill-ok",
                            }
                        }

                        div { class: "card",
                            h3 { "Verifications" }
                            VerificationItem { label: "Employment", verified: current.employment_verified }
                            VerificationItem { label: "Income", verified: current.income_verified }
                            VerificationItem { label: "Credit", verified: current.credit_verified }
                            p { class: "verify-note",
                                "Verifications are reviewed by our team and usually complete "
                                "within two business days."
                            }
                        }
                    }
                }
            }
        },
    }
}

/// Empty input means "not provided"; anything else must be a whole number.
fn parse_income(raw: &str) -> Result<Option<i64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| "Annual income must be a whole number".to_string())
}

#[component]
fn VerificationItem(label: String, verified: bool) -> Element {
    rsx! {
        div { class: "verify-row",
            div { class: "verify-row-name",
                span { class: if verified { "dot dot-on" } else { "dot" } }
                span { "{label}" }
            }
            if verified {
                span { class: "verify-done", "Verified" }
            } else {
                span { class: "verify-wait", "Not verified" }
            }
        }
    }
}
