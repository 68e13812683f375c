use crate::utils::error::Result;
use async_trait::async_trait;

/// Polarity scoring capability. Implementations return a compound score in [-1, 1].
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<f64>;
}

#[async_trait]
impl<T: SentimentScorer + ?Sized> SentimentScorer for Box<T> {
    async fn score(&self, text: &str) -> Result<f64> {
        (**self).score(text).await
    }
}
