use std::sync::{Arc, RwLock};

use chrono::Utc;
use rand::Rng;

use super::types::*;

/// Process-local store of shareholder applications. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct ShareholderStore {
    applications: Arc<RwLock<Vec<Shareholder>>>,
}

impl ShareholderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All applications, newest first.
    pub fn list(&self) -> Vec<Shareholder> {
        let list = self.applications.read().unwrap_or_else(|e| e.into_inner());
        // reversed first so equal timestamps keep later inserts ahead
        let mut all: Vec<Shareholder> = list.iter().rev().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    pub fn find_by_id(&self, id: &str) -> Option<Shareholder> {
        let list = self.applications.read().unwrap_or_else(|e| e.into_inner());
        list.iter().find(|s| s.id == id).cloned()
    }

    /// Store a validated application as `pending`.
    pub fn create(&self, app: NewApplication) -> Shareholder {
        let now = Utc::now();
        let shareholder = Shareholder {
            id: generate_id(),
            full_name: app.full_name.trim().to_string(),
            email: app.email.trim().to_lowercase(),
            mobile: app.mobile.trim().to_string(),
            location: app.location.trim().to_string(),
            referral_code: app
                .referral_code
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            pan_number: app.pan_number.trim().to_string(),
            nominee_name: app.nominee_name.trim().to_string(),
            nominee_relation: app.nominee_relation.trim().to_string(),
            id_proof_url: app.id_proof_url.trim().to_string(),
            share_purchase: app.share_purchase,
            terms_agreed: app.terms_agreed,
            approval_status: ApprovalStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let mut list = self.applications.write().unwrap_or_else(|e| e.into_inner());
        list.push(shareholder.clone());
        shareholder
    }

    pub fn update_status(&self, id: &str, status: ApprovalStatus) -> Option<Shareholder> {
        let mut list = self.applications.write().unwrap_or_else(|e| e.into_inner());
        let entry = list.iter_mut().find(|s| s.id == id)?;
        entry.approval_status = status;
        entry.updated_at = Utc::now();
        Some(entry.clone())
    }

    /// Returns false when no application has that id.
    pub fn delete(&self, id: &str) -> bool {
        let mut list = self.applications.write().unwrap_or_else(|e| e.into_inner());
        let before = list.len();
        list.retain(|s| s.id != id);
        list.len() != before
    }
}

/// Random 12-byte id rendered as 24 hex chars.
fn generate_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 12] = rng.random();
    hex::encode(bytes)
}
