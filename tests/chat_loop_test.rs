use async_trait::async_trait;
use dealbot::app::ChatLoop;
use dealbot::{Catalog, Negotiator, Result, SentimentScorer, Speaker};
use std::sync::Arc;

struct Constant(f64);

#[async_trait]
impl SentimentScorer for Constant {
    async fn score(&self, _text: &str) -> Result<f64> {
        Ok(self.0)
    }
}

fn negotiator() -> Negotiator<Constant> {
    Negotiator::seeded(Arc::new(Catalog::builtin()), Constant(0.3), 8)
}

#[tokio::test]
async fn test_interactive_session_over_buffers() {
    let mut bot = negotiator();
    let session = bot.start_session("Laptop").unwrap();
    let mut chat = ChatLoop::new(&mut bot, session, false);

    let input = b"hello there\n/products\n600 is all I have\n/history\n/quit\n900\n".as_slice();
    let mut output: Vec<u8> = Vec::new();
    chat.run(input, &mut output).await.unwrap();

    let printed = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = printed.lines().collect();

    assert_eq!(
        lines[0],
        "Starting negotiation for a Laptop. The initial price is $850."
    );
    assert_eq!(lines[1], "Please enter a valid price in your message.");
    assert_eq!(&lines[2..5], &["Laptop ($850)", "Smartphone ($650)", "Headphones ($200)"]);
    assert_eq!(
        lines[5],
        "[bot] Sorry, the minimum price for the Laptop is $700. Your offer of $600 is too low."
    );
    assert_eq!(lines[6], "Chat History");
    assert_eq!(lines[7], "[user] Offered: $600 - Message: 600 is all I have");
    assert_eq!(lines.len(), 9);

    // 900 comes after /quit and is never submitted
    let transcript = chat.session().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].speaker, Speaker::User);
}

#[tokio::test]
async fn test_product_command_switches_and_reports_unknown() {
    let mut bot = negotiator();
    let session = bot.start_session("Laptop").unwrap();
    let mut chat = ChatLoop::new(&mut bot, session, false);

    let input = b"/product Toaster\n/product Headphones\n".as_slice();
    let mut output: Vec<u8> = Vec::new();
    chat.run(input, &mut output).await.unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("We don't sell 'Toaster'."));
    assert!(printed.contains("Starting negotiation for a Headphones. The initial price is $200."));
    assert_eq!(chat.session().product(), "Headphones");
}

#[tokio::test]
async fn test_one_shot_messages_as_json_then_transcript() {
    let mut bot = negotiator();
    let session = bot.start_session("Smartphone").unwrap();
    let mut chat = ChatLoop::new(&mut bot, session, true);

    let messages = vec![
        "".to_string(),
        "520 please".to_string(),
        "   ".to_string(),
        "700!".to_string(),
    ];
    let mut output: Vec<u8> = Vec::new();
    chat.run_messages(&messages, &mut output).await.unwrap();

    let printed = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(!printed.contains("Please enter a valid price"));

    let counter: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(counter["decision"], "counter_offer");
    assert_eq!(counter["offer"], 520);
    assert_eq!(counter["product"], "Smartphone");

    let accept: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(accept["decision"], "accept");
    assert_eq!(accept["discount"], counter["discount"]);

    assert_eq!(lines[3], "Chat History");
    assert_eq!(lines[4], "[user] Offered: $520 - Message: 520 please");
    assert!(lines[5].starts_with("[bot] We can't accept your offer of $520"));
    assert_eq!(lines[6], "[user] Offered: $700 - Message: 700!");
    assert!(lines[7].starts_with("[bot] Congratulations! We accept your offer of $700"));
    assert_eq!(chat.session().transcript().len(), 4);
}

#[tokio::test]
async fn test_offer_recorded_exactly_as_typed() {
    let mut bot = negotiator();
    let session = bot.start_session("Laptop").unwrap();
    let mut chat = ChatLoop::new(&mut bot, session, false);

    let input = b"   how about 900?  \n".as_slice();
    let mut output: Vec<u8> = Vec::new();
    chat.run(input, &mut output).await.unwrap();

    let transcript = chat.session().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(
        transcript[0].text,
        "Offered: $900 - Message:    how about 900?  "
    );
}
