//! Compiled field patterns shared by the check functions.

use std::sync::LazyLock;

use regex::Regex;

/// Strict identifier shape: alphanumeric, at least two characters.
/// Covers usernames, store names, product names and categories.
pub(crate) static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{2,}$").expect("valid identifier regex"));

/// Relaxed identifier shape used by search filters: alphanumeric, non-empty.
pub(crate) static IDENTIFIER_RELAXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("valid relaxed identifier regex"));

/// Comma-separated name lists (brands, categories on a product).
pub(crate) static NAME_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9,.]*$").expect("valid name list regex"));

/// Address parts: letters and whitespace only.
pub(crate) static ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]*$").expect("valid address regex"));

/// `local@domain.tld` with a 2-5 letter TLD.
pub(crate) static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_\-.]+)@([a-zA-Z0-9_\-.]+)\.([a-zA-Z]{2,5})$")
        .expect("valid email regex")
});

/// Exactly 16 digits.
pub(crate) static CREDIT_CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("valid credit card regex"));

/// Exactly 3 digits.
pub(crate) static CCV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("valid ccv regex"));

/// Card expiry in `MM/YY` with MM in 01-12.
pub(crate) static EXPIRY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[012])/\d{2}$").expect("valid expiry regex"));

/// Integer percentage strictly between 1 and 99.
pub(crate) static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9]|[1-9][0-9])$").expect("valid percent regex"));

/// Simple fraction `int/int` with both parts >= 1.
pub(crate) static FREE_PER_X: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9][0-9]*)/([1-9][0-9]*)$").expect("valid fraction regex"));

/// `name:int` pairs, comma separated, integers >= 1.
pub(crate) static NAME_QUANTITY_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((([a-zA-Z0-9]+):([1-9][0-9]*)),?)+$").expect("valid quantity map regex")
});

/// `name:number` pairs, comma separated, numbers may be signed decimals.
pub(crate) static NAME_PRICE_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([a-zA-Z0-9]+):([-+]*\d+\.\d+|[-+]*\d+),?)+$").expect("valid price map regex")
});

/// `d/m/yyyy` with 1-2 digit day and month.
pub(crate) static FULL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("valid date regex"));

/// Non-negative integer string.
pub(crate) static NON_NEGATIVE_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid integer regex"));
