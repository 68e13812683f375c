use crate::domain::model::{Price, Speaker, TranscriptEntry};
use crate::utils::error::{NegotiationError, Result};

/// One-time discount lifecycle: starts unfixed, moves to fixed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountState {
    #[default]
    Unfixed,
    Fixed(Price),
}

/// State of a single negotiation: selected product, fixed discount and
/// the append-only chat transcript.
#[derive(Debug, Clone)]
pub struct NegotiationSession {
    product: String,
    discount: DiscountState,
    transcript: Vec<TranscriptEntry>,
}

impl NegotiationSession {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            discount: DiscountState::Unfixed,
            transcript: Vec::new(),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Changes the selected product. The transcript and any fixed discount carry over.
    pub fn switch_product(&mut self, product: impl Into<String>) {
        self.product = product.into();
    }

    pub fn discount_state(&self) -> DiscountState {
        self.discount
    }

    pub fn current_discount(&self) -> Option<Price> {
        match self.discount {
            DiscountState::Unfixed => None,
            DiscountState::Fixed(value) => Some(value),
        }
    }

    pub fn fix_discount(&mut self, value: Price) -> Result<()> {
        match self.discount {
            DiscountState::Unfixed => {
                self.discount = DiscountState::Fixed(value);
                Ok(())
            }
            DiscountState::Fixed(current) => {
                Err(NegotiationError::DiscountAlreadyFixed { current })
            }
        }
    }

    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            speaker,
            text: text.into(),
        });
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }
}
