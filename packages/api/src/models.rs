//! Request and response payloads exchanged with the remote API.
//!
//! All of these mirror server-owned records; the client never computes them,
//! it only displays them. The one derived value the UI shows (the 33/33/34
//! verification percentage breakdown) lives on [`Profile`] as helper methods.

use serde::{Deserialize, Serialize};

/// The authenticated account, as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The tenant's trust profile. Owned by the remote system; the client holds a
/// read/write cache of the latest fetched or saved copy for the active screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub annual_income: Option<i64>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Server-computed rating, 0-100.
    #[serde(default)]
    pub trust_score: u8,
    #[serde(default)]
    pub employment_verified: bool,
    #[serde(default)]
    pub income_verified: bool,
    #[serde(default)]
    pub credit_verified: bool,
}

impl Profile {
    /// Verification percentage shown on the trust-score meter. The three
    /// flags weigh 33/33/34 so a fully verified profile reads 100.
    pub fn verification_percent(&self) -> u8 {
        let mut percent = 0;
        if self.employment_verified {
            percent += 33;
        }
        if self.income_verified {
            percent += 33;
        }
        if self.credit_verified {
            percent += 34;
        }
        percent
    }
}

/// Body for `PUT /profiles/me`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub occupation: Option<String>,
    pub company: Option<String>,
    pub annual_income: Option<i64>,
    pub bio: Option<String>,
}

/// Lifecycle of a landlord reference request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStatus {
    Pending,
    Completed,
    Declined,
}

impl ReferenceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReferenceStatus::Pending => "Pending",
            ReferenceStatus::Completed => "Completed",
            ReferenceStatus::Declined => "Declined",
        }
    }
}

/// A landlord evaluation request/response record tied to a past tenancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub landlord_name: String,
    #[serde(default)]
    pub landlord_email: Option<String>,
    #[serde(default)]
    pub landlord_phone: Option<String>,
    pub property_address: String,
    pub rental_period: String,
    pub status: ReferenceStatus,
    /// Code the tenant forwards to the landlord so they can submit the
    /// evaluation. Present while the request is pending.
    #[serde(default)]
    pub request_code: Option<String>,
    /// 1-5, filled in by the landlord on completion.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Body for `POST /references/request`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceRequest {
    pub landlord_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlord_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlord_phone: Option<String>,
    pub property_address: String,
    pub rental_period: String,
}

/// Writing style for a generated self-introduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Friendly,
    Concise,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Friendly, Tone::Concise];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Concise => "Concise",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tone::Professional => "Formal and trust-building",
            Tone::Friendly => "Warm and approachable",
            Tone::Concise => "Short and to the point",
        }
    }
}

/// An AI-written self-introduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intro {
    pub id: String,
    pub tone: Tone,
    pub content: String,
    /// ISO-8601 timestamp, display-only.
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateBody {
    pub tone: Tone,
}
