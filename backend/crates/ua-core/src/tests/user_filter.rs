use crate::{User, UserFilter};

use chrono::Utc;
use googletest::prelude::*;

fn user(email: &str, name: &str) -> User {
    let now = Utc::now();
    User {
        id: 1,
        email: email.to_string(),
        name: name.to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[test]
fn given_empty_search_when_built_then_matches_everything() {
    let filter = UserFilter::from_search("");

    assert_that!(filter.search(), none());
    assert_that!(filter.matches(&user("a@b.com", "Ada")), eq(true));
}

#[test]
fn given_search_when_matching_name_then_case_is_ignored() {
    let filter = UserFilter::from_search("LOVE");

    assert_that!(filter.matches(&user("ada@example.com", "Ada Lovelace")), eq(true));
}

#[test]
fn given_search_when_matching_email_then_user_matches() {
    let filter = UserFilter::from_search("example.org");

    assert_that!(filter.matches(&user("grace@example.org", "Grace")), eq(true));
    assert_that!(filter.matches(&user("grace@example.com", "Grace")), eq(false));
}

#[test]
fn given_deleted_user_when_matched_then_excluded() {
    let mut deleted = user("ada@example.com", "Ada");
    deleted.deleted_at = Some(Utc::now());

    assert_that!(UserFilter::all().matches(&deleted), eq(false));
}

#[test]
fn given_non_ascii_search_when_matching_then_unicode_case_is_ignored() {
    let accented = UserFilter::from_search("élise");
    let cyrillic = UserFilter::from_search("борис");

    assert_that!(accented.matches(&user("e@example.fr", "Élise Dupont")), eq(true));
    assert_that!(cyrillic.matches(&user("b@example.ru", "БОРИС Иванов")), eq(true));
}
