use crate::ListUsersQuery;

use googletest::prelude::*;

fn query(page: Option<&str>, limit: Option<&str>) -> ListUsersQuery {
    ListUsersQuery {
        page: page.map(String::from),
        limit: limit.map(String::from),
        search: None,
    }
}

#[test]
fn given_absent_params_when_parsed_then_none() {
    let q = ListUsersQuery::default();

    assert_that!(q.page(), none());
    assert_that!(q.limit(), none());
    assert_that!(q.search(), none());
}

#[test]
fn given_numeric_params_when_parsed_then_values() {
    let q = query(Some("3"), Some(" 25 "));

    assert_that!(q.page(), some(eq(3)));
    assert_that!(q.limit(), some(eq(25)));
}

#[test]
fn given_garbage_params_when_parsed_then_zero() {
    let q = query(Some("abc"), Some(""));

    assert_that!(q.page(), some(eq(0)));
    assert_that!(q.limit(), some(eq(0)));
}

#[test]
fn given_overflowing_number_when_parsed_then_zero() {
    let q = query(Some("99999999999999999999999"), None);

    assert_that!(q.page(), some(eq(0)));
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_repeated_keys_when_built_from_pairs_then_first_occurrence_wins() {
    let q = ListUsersQuery::from_pairs(pairs(&[
        ("page", "1"),
        ("search", "a"),
        ("page", "2"),
        ("search", "b"),
    ]));

    assert_that!(q.page(), some(eq(1)));
    assert_that!(q.search(), some(eq("a")));
    assert_that!(q.limit(), none());
}

#[test]
fn given_unknown_keys_when_built_from_pairs_then_ignored() {
    let q = ListUsersQuery::from_pairs(pairs(&[("sort", "name"), ("limit", "5")]));

    assert_that!(q.limit(), some(eq(5)));
    assert_that!(q.page(), none());
}
