//! Pre-submit validation for user drafts.
//!
//! Lengths are measured in characters. A draft that produces an empty
//! [`FieldErrors`] may be submitted; anything else blocks the request.

use std::collections::BTreeMap;

use crate::model::{DraftField, UserDraft};

/// Violated rules keyed by field, in form order.
pub type FieldErrors = BTreeMap<DraftField, &'static str>;

pub fn validate(draft: &UserDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if char_len(&draft.name) < 3 {
        errors.insert(
            DraftField::Name,
            "Name is required and should be at least 3 characters.",
        );
    }
    if char_len(&draft.username) < 3 {
        errors.insert(
            DraftField::Username,
            "Username is required and must be at least 3 characters.",
        );
    }
    if char_len(&draft.email) < 5 {
        errors.insert(
            DraftField::Email,
            "Email is required and must be at least 5 characters.",
        );
    }
    if char_len(&draft.phone) != 10 {
        errors.insert(
            DraftField::Phone,
            "Phone is required and must be a 10-digit number.",
        );
    }
    if draft.address.street.is_empty() {
        errors.insert(DraftField::Street, "Street is required.");
    }
    if draft.address.city.is_empty() {
        errors.insert(DraftField::City, "City is required.");
    }
    if !draft.company.is_empty() && char_len(&draft.company) < 3 {
        errors.insert(
            DraftField::Company,
            "Company name must be at least 3 characters if provided.",
        );
    }
    if !draft.website.is_empty() && char_len(&draft.website) < 5 {
        errors.insert(
            DraftField::Website,
            "Website must be at least 5 characters if provided.",
        );
    }

    errors
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
