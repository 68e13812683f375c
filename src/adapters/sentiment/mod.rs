mod http;
mod keyword;

pub use http::HttpSentimentScorer;
pub use keyword::KeywordSentimentScorer;
