pub mod category;
pub mod search_outcome;
pub mod search_query;

pub use category::Category;
pub use search_outcome::SearchOutcome;
pub use search_query::SearchQuery;
