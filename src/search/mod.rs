pub mod criteria;
pub mod filter;
pub mod parser;
pub mod patterns;

pub use criteria::SearchCriteria;
pub use parser::{parse_query, QueryParser};
