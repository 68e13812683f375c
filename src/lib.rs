pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::sentiment::{HttpSentimentScorer, KeywordSentimentScorer};
pub use config::Catalog;
pub use crate::core::{
    decision::decide, discount::generate_discount, negotiator::Negotiator, price::extract_price,
    sentiment::classify, session::NegotiationSession,
};
pub use domain::model::{Decision, DiscountTier, Price, Product, Speaker, TranscriptEntry};
pub use domain::ports::SentimentScorer;
pub use utils::error::{NegotiationError, Result};
