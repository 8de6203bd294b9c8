//! Field names and user-facing messages for the validation rules.
//!
//! Field names double as the keys of a [`ValidationReport`](crate::ValidationReport)
//! and match the form field names the backend expects, so they are wire
//! contract, not presentation detail.

// === Field names ===

pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const PASS1: &str = "pass1";
pub const PASS2: &str = "pass2";

pub const STORENAME: &str = "storename";
pub const PRODUCT_NAME: &str = "product_name";
pub const CATEGORY: &str = "category";
pub const CATEGORIES: &str = "categories";
pub const BRAND: &str = "brand";
pub const BRANDS: &str = "brands";
pub const STORES_NAMES: &str = "stores_names";
pub const QUANTITY: &str = "quantity";
pub const PRICE: &str = "price";

pub const CREDIT_CARD: &str = "credit_card";
pub const CCV: &str = "ccv";
pub const EXPIRY_DATE: &str = "expiry_date";
pub const COUNTRY: &str = "country";
pub const CITY: &str = "city";
pub const STREET: &str = "street";
pub const HOUSE_NUMBER: &str = "house_number";
pub const APARTMENT: &str = "apartment";
pub const FLOOR: &str = "floor";

pub const PERCENT: &str = "percent";
pub const FREE_PER_X: &str = "free_per_x";
pub const OVERALL_PRODUCT_PRICE: &str = "overall_product_price";
pub const OVERALL_CATEGORY_PRICE: &str = "overall_category_price";
pub const OVERALL_PRODUCT_QUANTITY: &str = "overall_product_quantity";
pub const OVERALL_CATEGORY_QUANTITY: &str = "overall_category_quantity";
pub const UP_TO_DATE: &str = "up_to_date";
pub const BASKET_SIZE: &str = "basket_size";

pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";

// === Messages ===

pub const USER_NAME_EMPTY: &str = "Username cannot be empty";
pub const USER_NAME_INVALID: &str = "Username cannot contain @#!%^*+=._ characters, or spaces";
pub const EMAIL_EMPTY: &str = "Email cannot be empty";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASS1_EMPTY: &str = "Password cannot be empty";
pub const PASS_NOT_LONG_ENOUGH: &str = "Password needs to be at least 8 characters";
pub const PASS1_NOT_GOOD_ENOUGH: &str =
    "Password must contain capital letter, non capital letter, digit, special character";
pub const PASS2_EMPTY: &str = "Please Confirm your password";
pub const PASS2_NOT_MATCH: &str = "Passwords not matched";

pub const STORE_NAME_EMPTY: &str = "Store name cannot be empty";
pub const STORE_NAME_INVALID: &str = "Store name cannot contain @#!%^*+=._ characters, or spaces";
pub const PRODUCT_NAME_EMPTY: &str = "Product name cannot be empty";
pub const PRODUCT_NAME_INVALID: &str =
    "product name cannot contain @#!%^*+=._ characters, or spaces";
pub const CATEGORY_EMPTY: &str = "Category name cannot be empty";
pub const CATEGORY_INVALID: &str = "category name cannot contain @#!%^*+=._ characters, or spaces";
pub const CATEGORIES_INVALID: &str = "category cannot contain @#!%^*+=._ characters, or spaces";
pub const BRANDS_NAME_INVALID: &str = "brand cannot contain @#!%^*+=._ characters, or spaces";
pub const POSITIVE_NUMBER_EXPECTED: &str = "Must be a positive number";

pub const CREDIT_CARD_INVALID: &str = "credit card must contain 16 digits only";
pub const CCV_INVALID: &str = "Invalid ccv";
pub const EXPIRY_DATE_INVALID: &str = "Invalid Expiry Date";
pub const COUNTRY_INVALID: &str = "Invalid Country Name";
pub const CITY_INVALID: &str = "Invalid City Name";
pub const STREET_INVALID: &str = "Invalid street Name";
pub const HOUSE_NUMBER_INVALID: &str = "Invalid house number";
pub const APARTMENT_INVALID: &str = "Invalid apartment identifier";
pub const FLOOR_INVALID: &str = "Invalid floor number";

pub const PERCENT_INVALID: &str = "Expected 1 to 100";
pub const FREE_PER_X_INVALID: &str =
    "Expected simple fraction, such as 1/3 which means 1 free if you buy 3";
pub const NAME_NUMBER_MAP_INVALID: &str =
    "Expected format of name1:int1,name:int2 where int_i >= 0";
pub const UP_TO_DATE_EMPTY: &str = "Up to date cannot be empty";
pub const UP_TO_DATE_INVALID: &str = "Expected full date d/m/y";
pub const BASKET_SIZE_INVALID: &str = "Basket size expected to be non-negative";

pub const INVALID_START_DATE: &str = "invalid start date";
pub const INVALID_END_DATE: &str = "invalid end date";

/// Minimum accepted password length.
pub const PASS_MIN_LENGTH: usize = 8;
