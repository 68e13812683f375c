use crate::adapters::sentiment::{HttpSentimentScorer, KeywordSentimentScorer};
use crate::config::Catalog;
use crate::domain::ports::SentimentScorer;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dealbot")]
#[command(about = "Negotiate a price with a sentiment-aware sales bot")]
pub struct CliConfig {
    #[arg(long, default_value = "Laptop", help = "Product to negotiate for")]
    pub product: String,

    #[arg(long, help = "TOML catalog file; built-in catalog when omitted")]
    pub catalog: Option<String>,

    #[arg(long, help = "HTTP sentiment service; keyword scorer when omitted")]
    pub sentiment_endpoint: Option<String>,

    #[arg(long, default_value = "5")]
    pub sentiment_timeout_secs: u64,

    #[arg(long, help = "Seed for reproducible discounts")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print each decision as a JSON line")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Offers to submit in order; starts an interactive chat when empty.
    pub messages: Vec<String>,
}

impl CliConfig {
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => {
                tracing::debug!("📂 Loading catalog from {}", path);
                Catalog::from_file(path)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn build_scorer(&self) -> Result<Box<dyn SentimentScorer>> {
        match &self.sentiment_endpoint {
            Some(endpoint) => {
                tracing::info!("🌐 Using HTTP sentiment service at {}", endpoint);
                let scorer = HttpSentimentScorer::new(
                    endpoint.clone(),
                    Duration::from_secs(self.sentiment_timeout_secs),
                )?;
                Ok(Box::new(scorer))
            }
            None => {
                tracing::info!("📝 Using built-in keyword sentiment scorer");
                Ok(Box::new(KeywordSentimentScorer::new()))
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("product", &self.product)?;
        if let Some(path) = &self.catalog {
            validate_non_empty_string("catalog", path)?;
        }
        if let Some(endpoint) = &self.sentiment_endpoint {
            validate_url("sentiment_endpoint", endpoint)?;
        }
        validate_positive_number("sentiment_timeout_secs", self.sentiment_timeout_secs, 1)?;
        Ok(())
    }
}
