pub mod articles;
pub mod keywords;
pub mod market_cap;

pub use keywords::KeywordMatcher;
pub use market_cap::format_market_cap;
