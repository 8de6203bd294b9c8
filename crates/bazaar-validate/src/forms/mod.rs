//! Aggregate validators, one per user operation.
//!
//! Every aggregate records all of its fields in the resulting report, never
//! short-circuiting, so a submission with several bad fields surfaces every
//! message at once. `is_valid` is the AND of all field outcomes.

mod auth;
mod discount;
mod policy;
mod product;
mod purchase;
mod search;
mod stats;
mod store;

pub use auth::{login, registration};
pub use discount::{DiscountForm, DiscountKind, discount};
pub use policy::{PolicyKind, policy};
pub use product::{edit_product, new_product};
pub use purchase::{PaymentForm, payment};
pub use search::{ProductSearch, search_products, search_stores};
pub use stats::date_range;
pub use store::{new_store, new_store_manager, new_store_owner};
