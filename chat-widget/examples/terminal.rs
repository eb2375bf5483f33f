//! Terminal front end for the chat widget.
//!
//! Reads lines from stdin, submits each one, and prints the transcript.
//! Configuration is the same JSON object a host page would pass to `init`:
//!
//!   CHAT_WIDGET_CONFIG='{"apiUrl":"http://localhost:8080"}' \
//!     RUST_LOG=debug cargo run --example terminal -p chat-widget

use chat_widget::{ChatWidget, IgnoreReason, SubmitOutcome, WidgetConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber (respects RUST_LOG env var).
    tracing_subscriber::fmt::init();

    let config = match std::env::var("CHAT_WIDGET_CONFIG") {
        Ok(json) => WidgetConfig::from_json(&json)?,
        Err(_) => WidgetConfig::default(),
    };
    let widget = ChatWidget::mount(config)?;

    print!("{}", widget.view());
    println!("({})", widget.config().placeholder);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match widget.submit(&line).await {
            SubmitOutcome::Replied(reply) => println!("ki> {}", reply.content()),
            SubmitOutcome::Ignored(IgnoreReason::Empty) => {}
            SubmitOutcome::Ignored(IgnoreReason::Busy) => println!("(busy)"),
        }
    }

    Ok(())
}
