use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// 所有價格都是整數美元
pub type Price = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Part of the catalog contract; not consulted by the decision engine.
    pub max_price: Price,
    pub min_price: Price,
    pub start_price: Price,
}

impl Product {
    pub fn new(id: impl Into<String>, max_price: Price, min_price: Price, start_price: Price) -> Self {
        Self {
            id: id.into(),
            max_price,
            min_price,
            start_price,
        }
    }

    pub fn discounted_price(&self, discount: Price) -> Price {
        self.start_price - discount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountTier {
    Positive,
    Neutral,
    Negative,
}

impl DiscountTier {
    /// Closed range the one-time discount is drawn from.
    pub fn discount_range(self) -> RangeInclusive<Price> {
        match self {
            DiscountTier::Positive => 30..=50,
            DiscountTier::Neutral => 10..=30,
            DiscountTier::Negative => 5..=15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Accept {
        offer: Price,
        product: String,
        discount: Price,
    },
    RejectTooLow {
        offer: Price,
        product: String,
        min_price: Price,
    },
    CounterOffer {
        offer: Price,
        product: String,
        discount: Price,
        discounted_price: Price,
    },
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accept { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn as_str(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Bot => "bot",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}
