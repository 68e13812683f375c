use crate::core::negotiator::Negotiator;
use crate::core::render::opening_line;
use crate::core::session::NegotiationSession;
use crate::domain::model::{Decision, TranscriptEntry};
use crate::domain::ports::SentimentScorer;
use crate::utils::error::Result;
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    History,
    Products,
    Product(String),
    Quit,
    Offer(String),
    Empty,
}

impl Command {
    /// Offers keep the line exactly as typed.
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        match line.split_once(char::is_whitespace) {
            Some(("/product", rest)) => Command::Product(rest.trim().to_string()),
            _ => match line {
                "/history" => Command::History,
                "/products" => Command::Products,
                "/product" => Command::Product(String::new()),
                "/quit" | "/exit" => Command::Quit,
                _ => Command::Offer(raw.to_string()),
            },
        }
    }
}

/// Terminal front end for one negotiation session.
pub struct ChatLoop<'a, S: SentimentScorer, R: Rng> {
    negotiator: &'a mut Negotiator<S, R>,
    session: NegotiationSession,
    json: bool,
}

impl<'a, S: SentimentScorer, R: Rng> ChatLoop<'a, S, R> {
    pub fn new(negotiator: &'a mut Negotiator<S, R>, session: NegotiationSession, json: bool) -> Self {
        Self {
            negotiator,
            session,
            json,
        }
    }

    pub fn session(&self) -> &NegotiationSession {
        &self.session
    }

    pub async fn greet<O: AsyncWrite + Unpin>(&self, out: &mut O) -> Result<()> {
        let product = self.negotiator.product_for(&self.session)?;
        say(out, &opening_line(&product.id, product.start_price)).await
    }

    /// Reads lines until EOF or `/quit`.
    pub async fn run<I, O>(&mut self, input: I, out: &mut O) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        self.greet(out).await?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if !self.handle(&line, out).await? {
                break;
            }
        }
        tracing::debug!(
            "Chat loop finished with {} transcript entries",
            self.session.transcript().len()
        );
        Ok(())
    }

    /// Submits each non-blank message in order, then prints the transcript.
    pub async fn run_messages<O: AsyncWrite + Unpin>(
        &mut self,
        messages: &[String],
        out: &mut O,
    ) -> Result<()> {
        self.greet(out).await?;
        for message in messages.iter().filter(|m| !m.trim().is_empty()) {
            self.offer(message, out).await?;
        }
        self.history(out).await
    }

    /// Returns `false` once the user asks to quit.
    pub async fn handle<O: AsyncWrite + Unpin>(&mut self, line: &str, out: &mut O) -> Result<bool> {
        match Command::parse(line) {
            Command::Empty => {}
            Command::Quit => return Ok(false),
            Command::History => self.history(out).await?,
            Command::Products => {
                for product in self.negotiator.catalog().products() {
                    say(out, &format!("{} (${})", product.id, product.start_price)).await?;
                }
            }
            Command::Product(id) => match self.negotiator.switch_product(&mut self.session, &id) {
                Ok(()) => self.greet(out).await?,
                Err(e) => {
                    tracing::debug!("Product switch rejected: {}", e);
                    say(out, &e.user_friendly_message()).await?;
                }
            },
            Command::Offer(text) => self.offer(&text, out).await?,
        }
        Ok(true)
    }

    async fn history<O: AsyncWrite + Unpin>(&self, out: &mut O) -> Result<()> {
        say(out, "Chat History").await?;
        for entry in self.session.transcript() {
            say(out, &format_entry(entry)).await?;
        }
        Ok(())
    }

    async fn offer<O: AsyncWrite + Unpin>(&mut self, text: &str, out: &mut O) -> Result<()> {
        match self.negotiator.submit(&mut self.session, text).await {
            Ok(decision) => self.show(&decision, out).await,
            Err(e) if e.is_retryable() => {
                tracing::debug!("Submission rejected: {}", e);
                say(out, &e.user_friendly_message()).await
            }
            Err(e) => Err(e),
        }
    }

    async fn show<O: AsyncWrite + Unpin>(&self, decision: &Decision, out: &mut O) -> Result<()> {
        if self.json {
            let line = serde_json::to_string(decision)?;
            return say(out, &line).await;
        }
        match self.session.transcript().last() {
            Some(entry) => say(out, &format_entry(entry)).await,
            None => Ok(()),
        }
    }
}

pub fn format_entry(entry: &TranscriptEntry) -> String {
    format!("[{}] {}", entry.speaker, entry.text)
}

async fn say<O: AsyncWrite + Unpin>(out: &mut O, line: &str) -> Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}
