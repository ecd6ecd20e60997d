mod movie;
mod query;

pub use movie::{MovieDetail, MovieSummary, SearchPage};
pub(crate) use movie::deserialize_total_results;
pub use query::SearchQuery;
