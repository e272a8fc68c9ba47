pub mod field_rules;
pub mod rating_policy;

pub use field_rules::{
    resolve_address, truncate_description, ADDRESS_NOT_AVAILABLE, DESCRIPTION_LIMIT,
    NO_DESCRIPTION, UNTITLED_EVENT,
};
pub use rating_policy::{RatingPolicy, MIN_RATING};
