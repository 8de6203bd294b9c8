//! Unit tests for the field-level checks.

use bazaar_validate::FieldOutcome;
use bazaar_validate::checks::{address, credential, date_field, identifier, numeric, payment};
use bazaar_validate::messages;

#[test]
fn test_username_rules() {
    assert!(identifier::username("alice").passed());
    assert!(identifier::username("a1").passed());

    let empty = identifier::username("");
    assert!(!empty.passed());
    assert_eq!(empty.message(), messages::USER_NAME_EMPTY);

    let with_space = identifier::username("ali ce");
    assert!(!with_space.passed());
    assert_eq!(with_space.message(), messages::USER_NAME_INVALID);

    // Single character is too short for the strict identifier shape.
    assert!(!identifier::username("a").passed());
    assert!(!identifier::username("ali_ce").passed());
    assert!(!identifier::username("ali.ce").passed());
}

#[test]
fn test_optional_identifiers_accept_blank() {
    assert!(identifier::product_name_optional("").passed());
    assert!(identifier::category_optional("").passed());
    assert!(!identifier::product_name_optional("bad name").passed());
    assert!(!identifier::category_optional("bad name").passed());
}

#[test]
fn test_name_lists() {
    assert!(identifier::brand_list("").passed());
    assert!(identifier::brand_list("acme").passed());
    assert!(identifier::brand_list("acme,globex").passed());
    assert!(identifier::category_list("food,drink.soft").passed());

    let spaced = identifier::brand_list("acme, globex");
    assert!(!spaced.passed());
    assert_eq!(spaced.message(), messages::BRANDS_NAME_INVALID);
    assert!(!identifier::category_list("food;drink").passed());
}

#[test]
fn test_search_filters_are_relaxed() {
    // The relaxed shape accepts a single character; blank means no filter.
    assert!(identifier::store_name_filter("").passed());
    assert!(identifier::store_name_filter("s").passed());
    assert!(identifier::store_name_filter("  ").passed());
    assert!(!identifier::store_name_filter("s tore").passed());
}

#[test]
fn test_email_rules() {
    assert!(credential::email("alice@example.com").passed());
    assert!(credential::email("a.b-c_d@mail.co").passed());

    assert_eq!(credential::email("").message(), messages::EMAIL_EMPTY);
    assert_eq!(
        credential::email("not-an-email").message(),
        messages::EMAIL_INVALID
    );
    assert!(!credential::email("alice@example").passed());
    assert!(!credential::email("alice@example.toolong").passed());
}

#[test]
fn test_password_strength() {
    assert!(credential::password("Str0ng!pass").passed());
    assert_eq!(credential::password("").message(), messages::PASS1_EMPTY);

    // Long enough but weak: one message.
    let weak = credential::password("abcdefgh");
    assert_eq!(weak.message(), messages::PASS1_NOT_GOOD_ENOUGH);

    // Short and weak: both messages, newline-joined.
    let both = credential::password("abc");
    assert_eq!(
        both.message(),
        format!(
            "{}\n{}",
            messages::PASS1_NOT_GOOD_ENOUGH,
            messages::PASS_NOT_LONG_ENOUGH
        )
    );
}

#[test]
fn test_confirm_password() {
    assert!(credential::confirm_password("Str0ng!pass", "Str0ng!pass").passed());
    assert_eq!(
        credential::confirm_password("Str0ng!pass", "").message(),
        messages::PASS2_EMPTY
    );
    assert_eq!(
        credential::confirm_password("Str0ng!pass", "other").message(),
        messages::PASS2_NOT_MATCH
    );
}

#[test]
fn test_credit_card_is_sixteen_digits() {
    assert!(payment::credit_card_required("1234567890123456").passed());
    assert!(!payment::credit_card_required("123456789012345").passed());
    assert!(!payment::credit_card_required("12345678901234567").passed());
    assert!(!payment::credit_card_required("1234-5678-9012-3456").passed());
    assert!(!payment::credit_card_required("").passed());

    // The saved-card variant tolerates blank only.
    assert!(payment::credit_card_optional("").passed());
    assert!(!payment::credit_card_optional("1234").passed());
}

#[test]
fn test_blank_payment_fields_fail_silently() {
    let ccv = payment::ccv("");
    assert!(!ccv.passed());
    assert!(ccv.message().is_empty());

    let expiry = payment::expiry_date("");
    assert!(!expiry.passed());
    assert!(expiry.message().is_empty());

    assert!(payment::ccv("123").passed());
    assert_eq!(payment::ccv("12").message(), messages::CCV_INVALID);
    assert!(payment::expiry_date("12/25").passed());
    assert!(payment::expiry_date("01/30").passed());
    assert!(!payment::expiry_date("13/25").passed());
    assert!(!payment::expiry_date("1/25").passed());
}

#[test]
fn test_address_parts() {
    assert!(address::country("United Kingdom").passed());
    assert_eq!(address::country("").message(), messages::COUNTRY_INVALID);
    assert_eq!(address::city("T3l Aviv").message(), messages::CITY_INVALID);
    assert_eq!(address::street("5th").message(), messages::STREET_INVALID);

    let house = address::house_number("");
    assert!(!house.passed());
    assert!(house.message().is_empty());
    assert!(address::house_number("12").passed());
    assert_eq!(
        address::house_number("12b").message(),
        messages::HOUSE_NUMBER_INVALID
    );

    assert!(address::floor("").passed());
    assert!(address::floor("3").passed());
    assert!(!address::floor("third").passed());
    assert!(address::apartment("").passed());
    assert!(!address::apartment("4a").passed());
}

#[test]
fn test_percent_bounds() {
    assert!(numeric::percent("1").passed());
    assert!(numeric::percent("99").passed());
    assert!(!numeric::percent("0").passed());
    assert!(!numeric::percent("100").passed());
    assert!(!numeric::percent("-5").passed());
    assert_eq!(numeric::percent("").message(), messages::PERCENT_INVALID);
}

#[test]
fn test_free_per_x_fraction() {
    assert!(numeric::free_per_x("1/3").passed());
    assert!(numeric::free_per_x("2/10").passed());
    assert!(!numeric::free_per_x("3").passed());
    assert!(!numeric::free_per_x("0/3").passed());
    assert!(!numeric::free_per_x("1/0").passed());
    assert_eq!(
        numeric::free_per_x("1/").message(),
        messages::FREE_PER_X_INVALID
    );
}

#[test]
fn test_threshold_maps() {
    assert!(numeric::quantity_map("").passed());
    assert!(numeric::quantity_map("apple:3").passed());
    assert!(numeric::quantity_map("apple:3,pear:1").passed());
    assert!(!numeric::quantity_map("apple:0").passed());
    assert!(!numeric::quantity_map("apple").passed());

    assert!(numeric::price_map("apple:3.5").passed());
    assert!(numeric::price_map("apple:-2.0,pear:7").passed());
    assert!(!numeric::price_map("apple:").passed());
}

#[test]
fn test_basket_size() {
    assert!(numeric::basket_size("").passed());
    assert!(numeric::basket_size("  ").passed());
    assert!(numeric::basket_size("0").passed());
    assert!(numeric::basket_size("17").passed());
    assert_eq!(
        numeric::basket_size("-1").message(),
        messages::BASKET_SIZE_INVALID
    );
}

#[test]
fn test_non_negative_amount() {
    assert!(numeric::non_negative_amount(0.0).passed());
    assert!(numeric::non_negative_amount(12.5).passed());
    assert_eq!(
        numeric::non_negative_amount(-0.5).message(),
        messages::POSITIVE_NUMBER_EXPECTED
    );
}

#[test]
fn test_up_to_date() {
    assert!(date_field::up_to_date("1/1/2027").passed());
    assert!(date_field::up_to_date("31/12/2027").passed());
    assert_eq!(
        date_field::up_to_date("").message(),
        messages::UP_TO_DATE_EMPTY
    );
    assert_eq!(
        date_field::up_to_date("2027-01-01").message(),
        messages::UP_TO_DATE_INVALID
    );
}

#[test]
fn test_today_string_fits_the_date_fields() {
    let today = bazaar_validate::dates::today_string();
    assert!(date_field::up_to_date(&today).passed());
    assert!(date_field::range_date(&today, "bad").passed());
}

#[test]
fn test_range_date_must_be_realizable() {
    assert!(date_field::range_date("", "bad").passed());
    assert!(date_field::range_date("29/2/2024", "bad").passed());
    // Matches the textual shape but is not a calendar date.
    let impossible = date_field::range_date("31/2/2024", "bad");
    assert!(!impossible.passed());
    assert_eq!(impossible.message(), "bad");
}

#[test]
fn test_field_outcome_accessors() {
    assert!(FieldOutcome::Pass.passed());
    assert_eq!(FieldOutcome::Pass.message(), "");
    assert!(!FieldOutcome::FailSilent.passed());
    assert_eq!(FieldOutcome::FailSilent.message(), "");
    let failed = FieldOutcome::fail("nope");
    assert!(!failed.passed());
    assert_eq!(failed.message(), "nope");
}
