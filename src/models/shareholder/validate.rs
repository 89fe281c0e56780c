use std::sync::LazyLock;

use regex::Regex;

use super::types::NewApplication;

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN pattern"));

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate a mobile number: exactly 10 digits.
pub fn validate_mobile(mobile: &str) -> Option<String> {
    let trimmed = mobile.trim();
    if trimmed.is_empty() {
        return Some("Mobile number is required".to_string());
    }
    if trimmed.len() != 10 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Some("Mobile number must be 10 digits".to_string());
    }
    None
}

/// Validate a PAN: five letters, four digits, one letter (upper case).
pub fn validate_pan(pan: &str) -> Option<String> {
    let trimmed = pan.trim();
    if trimmed.is_empty() {
        return Some("PAN number is required".to_string());
    }
    if !PAN_RE.is_match(trimmed) {
        return Some("PAN number must look like ABCDE1234F".to_string());
    }
    None
}

/// Collect every problem with an application; empty means valid.
pub fn validate_application(app: &NewApplication) -> Vec<String> {
    let mut errors = Vec::new();
    errors.extend(validate_required(&app.full_name, "Full name", 100));
    errors.extend(validate_email(&app.email));
    errors.extend(validate_mobile(&app.mobile));
    errors.extend(validate_required(&app.location, "Location", 100));
    errors.extend(validate_pan(&app.pan_number));
    errors.extend(validate_required(&app.nominee_name, "Nominee name", 100));
    errors.extend(validate_required(&app.nominee_relation, "Nominee relation", 50));
    errors.extend(validate_required(&app.id_proof_url, "ID proof", 500));
    if app.share_purchase == 0 {
        errors.push("At least one share must be purchased".to_string());
    }
    if !app.terms_agreed {
        errors.push("Terms must be accepted".to_string());
    }
    errors
}
