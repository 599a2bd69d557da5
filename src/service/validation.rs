//! Field rules for forums.

use crate::models::Forum;
use crate::validator::{matches, unique, valid_website, Validator, EMAIL_RX, PHONE_RX};

const MAX_TEXT_BYTES: usize = 200;
const MAX_ADDRESS_BYTES: usize = 500;
const MAX_MODES: usize = 5;

/// Runs every rule; the first failure per field is kept.
pub fn validate_forum(v: &mut Validator, forum: &Forum) {
    check_text(v, "name", &forum.name, MAX_TEXT_BYTES);
    check_text(v, "level", &forum.level, MAX_TEXT_BYTES);
    check_text(v, "contact", &forum.contact, MAX_TEXT_BYTES);

    v.check(!forum.phone.is_empty(), "phone", "must be provided");
    v.check(matches(&forum.phone, &PHONE_RX), "phone", "must be a valid phone number");

    v.check(!forum.email.is_empty(), "email", "must be provided");
    v.check(matches(&forum.email, &EMAIL_RX), "email", "must be a valid email address");

    v.check(!forum.website.is_empty(), "website", "must be provided");
    v.check(valid_website(&forum.website), "website", "must be a valid URL");

    check_text(v, "address", &forum.address, MAX_ADDRESS_BYTES);

    let mode = forum.mode.as_deref().unwrap_or_default();
    v.check(forum.mode.is_some(), "mode", "must be provided");
    v.check(!mode.is_empty(), "mode", "must contain at least 1 entry");
    v.check(mode.len() <= MAX_MODES, "mode", "must contain at most 5 entries");
    v.check(unique(mode), "mode", "must not contain duplicate entries");
}

fn check_text(v: &mut Validator, key: &str, value: &str, max_bytes: usize) {
    v.check(!value.is_empty(), key, "must be provided");
    v.check(
        value.len() <= max_bytes,
        key,
        &format!("must not be more than {} bytes long", max_bytes),
    );
}
