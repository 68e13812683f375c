pub mod decision;
pub mod discount;
pub mod negotiator;
pub mod price;
pub mod render;
pub mod sentiment;
pub mod session;

pub use crate::domain::model::{Decision, DiscountTier, Price, Product, Speaker, TranscriptEntry};
pub use crate::domain::ports::SentimentScorer;
pub use crate::utils::error::Result;
