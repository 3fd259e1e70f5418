use crate::api::users::users::parse_user_id;

use googletest::prelude::*;

#[test]
fn given_decimal_digits_when_parsed_then_id() {
    assert_that!(parse_user_id("1"), some(eq(1)));
    assert_that!(parse_user_id("007"), some(eq(7)));
    assert_that!(parse_user_id("4294967295"), some(eq(u32::MAX)));
}

#[test]
fn given_sign_or_whitespace_when_parsed_then_rejected() {
    assert_that!(parse_user_id("+1"), none());
    assert_that!(parse_user_id("-1"), none());
    assert_that!(parse_user_id(" 1"), none());
    assert_that!(parse_user_id(""), none());
}

#[test]
fn given_out_of_range_when_parsed_then_rejected() {
    assert_that!(parse_user_id("4294967296"), none());
}
