use crate::domain::model::DiscountTier;
use crate::domain::ports::SentimentScorer;
use crate::utils::error::Result;

/// Maps a compound polarity score onto a discount tier.
///
/// First match wins: `s > 0.5` is positive, `0 <= s <= 0.5` is neutral,
/// anything else is negative.
pub fn tier_for_score(score: f64) -> DiscountTier {
    if score > 0.5 {
        DiscountTier::Positive
    } else if (0.0..=0.5).contains(&score) {
        DiscountTier::Neutral
    } else {
        DiscountTier::Negative
    }
}

/// Scores `text` with the given scorer and returns its tier.
///
/// Scorer failures propagate unchanged; there is no fallback tier.
pub async fn classify<S>(scorer: &S, text: &str) -> Result<DiscountTier>
where
    S: SentimentScorer + ?Sized,
{
    let score = scorer.score(text).await?;
    let tier = tier_for_score(score);
    tracing::debug!("🎭 Sentiment score {:.4} -> {:?}", score, tier);
    Ok(tier)
}
