use crate::domain::model::Price;
use regex::Regex;
use std::sync::LazyLock;

// ASCII only: `\d` would also match non-ASCII digits that `parse` rejects.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));

/// Returns the value of the first run of decimal digits in `text`.
///
/// Signs, decimal points and thousands separators are not understood, so
/// `"1,200"` yields `1`. A run too large for [`Price`] counts as no price.
pub fn extract_price(text: &str) -> Option<Price> {
    let run = DIGIT_RUN.find(text)?;
    match run.as_str().parse::<Price>() {
        Ok(price) => Some(price),
        Err(e) => {
            tracing::debug!("Ignoring oversized digit run '{}': {}", run.as_str(), e);
            None
        }
    }
}
