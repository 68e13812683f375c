use crate::domain::model::{Decision, Price};

pub fn response_text(decision: &Decision) -> String {
    match decision {
        Decision::Accept {
            offer,
            product,
            discount,
        } => format!(
            "Congratulations! We accept your offer of ${} for the {}. A discount of ${} has been applied due to your feedback.",
            offer, product, discount
        ),
        Decision::RejectTooLow {
            offer,
            product,
            min_price,
        } => format!(
            "Sorry, the minimum price for the {} is ${}. Your offer of ${} is too low.",
            product, min_price, offer
        ),
        Decision::CounterOffer {
            offer,
            product,
            discount,
            discounted_price,
        } => format!(
            "We can't accept your offer of ${}, but we can offer the {} for ${}. A discount of ${} has been applied due to your feedback. How does that sound?",
            offer, product, discounted_price, discount
        ),
    }
}

/// Transcript text for the user's side of a valid submission.
pub fn user_entry_text(offer: Price, message: &str) -> String {
    format!("Offered: ${} - Message: {}", offer, message)
}

pub fn opening_line(product: &str, start_price: Price) -> String {
    format!(
        "Starting negotiation for a {}. The initial price is ${}.",
        product, start_price
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_offer_embeds_all_numbers() {
        let text = response_text(&Decision::CounterOffer {
            offer: 760,
            product: "Laptop".to_string(),
            discount: 40,
            discounted_price: 810,
        });
        assert!(text.contains("$760"));
        assert!(text.contains("Laptop for $810"));
        assert!(text.contains("discount of $40"));
    }

    #[test]
    fn test_reject_mentions_floor() {
        let text = response_text(&Decision::RejectTooLow {
            offer: 100,
            product: "Smartphone".to_string(),
            min_price: 500,
        });
        assert_eq!(
            text,
            "Sorry, the minimum price for the Smartphone is $500. Your offer of $100 is too low."
        );
    }

    #[test]
    fn test_user_entry_text() {
        assert_eq!(
            user_entry_text(180, "180 please, I love these"),
            "Offered: $180 - Message: 180 please, I love these"
        );
    }
}
