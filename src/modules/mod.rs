pub mod discovery;
pub mod location;
pub mod presentation;
pub mod search;
