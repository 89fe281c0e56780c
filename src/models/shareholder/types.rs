use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

/// A shareholder application as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shareholder {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    pub pan_number: String,
    pub nominee_name: String,
    pub nominee_relation: String,
    pub id_proof_url: String,
    pub share_purchase: u32,
    pub terms_agreed: bool,
    pub approval_status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/shareholder/apply`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub location: String,
    #[serde(default)]
    pub referral_code: Option<String>,
    pub pan_number: String,
    pub nominee_name: String,
    pub nominee_relation: String,
    pub id_proof_url: String,
    pub share_purchase: u32,
    #[serde(default)]
    pub terms_agreed: bool,
}

/// Body of `PUT /api/shareholder/approval/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: ApprovalStatus,
}
