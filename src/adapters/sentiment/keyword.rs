use crate::domain::ports::SentimentScorer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

const LEXICON: &[(&str, f64)] = &[
    ("love", 3.2),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("great", 3.1),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("happy", 2.7),
    ("glad", 2.0),
    ("nice", 1.8),
    ("good", 1.9),
    ("fair", 1.3),
    ("like", 1.5),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("please", 1.3),
    ("appreciate", 2.0),
    ("deal", 0.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("bad", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("hate", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("disappointed", -1.9),
    ("ridiculous", -1.8),
    ("expensive", -0.9),
    ("overpriced", -1.8),
    ("rip", -1.2),
    ("scam", -2.5),
    ("worst", -3.1),
    ("sad", -2.1),
    ("no", -1.2),
];

const NEGATIONS: &[&str] = &[
    "not", "never", "don't", "dont", "doesn't", "doesnt", "isn't", "isnt", "won't", "wont",
    "can't", "cant", "nothing", "without",
];

/// In-process polarity scorer built on a small weighted word list.
///
/// A negation within the three preceding words flips and dampens a word's
/// valence, exclamation marks push the total further from zero, and the
/// sum is squashed into [-1, 1] with `x / sqrt(x² + 15)`.
pub struct KeywordSentimentScorer {
    lexicon: HashMap<&'static str, f64>,
}

impl KeywordSentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    pub fn compound(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|word| !word.is_empty())
            .collect();

        let mut sum = 0.0;
        for (i, word) in words.iter().enumerate() {
            let Some(valence) = self.lexicon.get(*word) else {
                continue;
            };
            let negated = words[i.saturating_sub(3)..i]
                .iter()
                .any(|prev| NEGATIONS.contains(prev));
            sum += if negated {
                valence * NEGATION_SCALAR
            } else {
                *valence
            };
        }

        if sum == 0.0 {
            return 0.0;
        }

        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
        sum += sum.signum() * exclamations * EXCLAMATION_BOOST;

        let score = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
        score.clamp(-1.0, 1.0)
    }
}

impl Default for KeywordSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentScorer for KeywordSentimentScorer {
    async fn score(&self, text: &str) -> Result<f64> {
        Ok(self.compound(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_without_keywords() {
        let scorer = KeywordSentimentScorer::new();
        assert_eq!(scorer.compound("I offer 750"), 0.0);
        assert_eq!(scorer.compound(""), 0.0);
    }

    #[test]
    fn test_polarity_direction() {
        let scorer = KeywordSentimentScorer::new();
        assert!(scorer.compound("I love this laptop, it's amazing! 800") > 0.5);
        assert!(scorer.compound("this is a ridiculous scam, 500") < 0.0);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scorer = KeywordSentimentScorer::new();
        assert!(scorer.compound("this is good") > 0.0);
        assert!(scorer.compound("this is not good") < 0.0);
    }

    #[test]
    fn test_exclamations_amplify() {
        let scorer = KeywordSentimentScorer::new();
        let calm = scorer.compound("great price");
        let excited = scorer.compound("great price!!!");
        assert!(excited > calm);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        let scorer = KeywordSentimentScorer::new();
        let gushing = "love love love amazing awesome great wonderful!!!!!!!!";
        let s = scorer.compound(gushing);
        assert!(s > 0.9 && s <= 1.0);
        let furious = "worst scam hate horrible awful terrible!!!!";
        let s = scorer.compound(furious);
        assert!((-1.0..-0.9).contains(&s));
    }
}
