//! Field validation for user creation input.
//!
//! All fields are checked and every failure is reported, so clients can fix
//! the whole form in one round trip.

use crate::{FieldErrors, NewUser};

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;

// WHATWG "valid email address" grammar
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Return true if `email` is a syntactically valid address.
pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= EMAIL_MAX_CHARS && EMAIL_RE.is_match(email)
}

/// Validate raw creation input into a `NewUser`.
///
/// Missing and empty values are both reported as "required".
pub fn validate_new_user(email: Option<&str>, name: Option<&str>) -> Result<NewUser, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = email.unwrap_or_default();
    if email.is_empty() {
        errors.add("email", "email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "email must be a valid email address");
    }

    let name = name.unwrap_or_default();
    let name_chars = name.chars().count();
    if name.is_empty() {
        errors.add("name", "name is required");
    } else if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_chars) {
        errors.add(
            "name",
            format!(
                "name must be between {} and {} characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewUser {
        email: email.to_string(),
        name: name.to_string(),
    })
}
