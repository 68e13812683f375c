use crate::config::Catalog;
use crate::core::decision::decide;
use crate::core::discount::generate_discount;
use crate::core::price::extract_price;
use crate::core::render::{response_text, user_entry_text};
use crate::core::sentiment::classify;
use crate::core::session::NegotiationSession;
use crate::domain::model::{Decision, Price, Product, Speaker};
use crate::domain::ports::SentimentScorer;
use crate::utils::error::{NegotiationError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Runs submissions against a session: extract, classify, fix the
/// discount once, decide, then record both sides in the transcript.
pub struct Negotiator<S: SentimentScorer, R: Rng = StdRng> {
    catalog: Arc<Catalog>,
    scorer: S,
    rng: R,
}

impl<S: SentimentScorer> Negotiator<S, StdRng> {
    pub fn new(catalog: Arc<Catalog>, scorer: S) -> Self {
        Self::with_rng(catalog, scorer, StdRng::from_entropy())
    }

    pub fn seeded(catalog: Arc<Catalog>, scorer: S, seed: u64) -> Self {
        Self::with_rng(catalog, scorer, StdRng::seed_from_u64(seed))
    }
}

impl<S: SentimentScorer, R: Rng> Negotiator<S, R> {
    pub fn with_rng(catalog: Arc<Catalog>, scorer: S, rng: R) -> Self {
        Self {
            catalog,
            scorer,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn start_session(&self, product: &str) -> Result<NegotiationSession> {
        let selected = self.catalog.get(product)?;
        tracing::info!(
            "🤝 New session for {} (start ${})",
            selected.id,
            selected.start_price
        );
        Ok(NegotiationSession::new(selected.id.clone()))
    }

    pub fn switch_product(&self, session: &mut NegotiationSession, product: &str) -> Result<()> {
        let selected = self.catalog.get(product)?;
        tracing::info!("🔀 Switching session to {}", selected.id);
        session.switch_product(selected.id.clone());
        Ok(())
    }

    pub fn product_for(&self, session: &NegotiationSession) -> Result<&Product> {
        self.catalog.get(session.product())
    }

    /// Processes one user message.
    ///
    /// Invalid offers and scorer failures leave the session untouched.
    pub async fn submit(&mut self, session: &mut NegotiationSession, text: &str) -> Result<Decision> {
        let product = self.catalog.get(session.product())?.clone();

        let offer = extract_price(text).ok_or_else(|| NegotiationError::InvalidOffer {
            message: text.to_string(),
        })?;
        tracing::debug!("💬 Parsed offer ${} for {}", offer, product.id);

        let discount = self.session_discount(session, text).await?;
        let decision = decide(offer, &product, discount);
        tracing::info!("⚖️ Offer ${} for {} -> {:?}", offer, product.id, decision);

        session.append(Speaker::User, user_entry_text(offer, text));
        session.append(Speaker::Bot, response_text(&decision));

        Ok(decision)
    }

    // Only the first valid offer of a session is scored.
    async fn session_discount(&mut self, session: &mut NegotiationSession, text: &str) -> Result<Price> {
        if let Some(discount) = session.current_discount() {
            return Ok(discount);
        }

        let tier = classify(&self.scorer, text).await?;
        let discount = generate_discount(tier, &mut self.rng);
        session.fix_discount(discount)?;
        tracing::info!("🎁 Fixed {:?} discount of ${} for this session", tier, discount);
        Ok(discount)
    }
}
