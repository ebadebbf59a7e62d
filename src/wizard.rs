//! Interactive Wizard
//!
//! Runs the full interview on the terminal: prints the assistant side of the
//! transcript, reads answers from stdin, and awaits the completion request
//! before accepting further input. After the pitch is printed, any further
//! input is treated as revision feedback; an empty line ends the session.

use std::io::{BufRead, Write};
use std::sync::Arc;

use pitch_writer_core::{Message, MessageRole};
use pitch_writer_llm::CompletionProvider;

use crate::services::chat::ChatSession;
use crate::utils::error::AppResult;

/// Run the interview wizard to completion
pub async fn run(provider: Arc<dyn CompletionProvider>) -> AppResult<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let mut session = ChatSession::new(provider);
    render(&session.start());

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed
            break;
        };
        let input = line?;

        if session.is_complete() && input.trim().is_empty() {
            break;
        }

        // Both the final answer and revision feedback trigger a completion
        if !input.trim().is_empty() && (session.on_final_question() || session.is_complete()) {
            println!("Generating your pitch...");
        }

        let appended = session.submit(&input).await?;
        render(&appended);
    }

    Ok(())
}

fn render(messages: &[Message]) {
    for message in messages {
        if message.role == MessageRole::Assistant {
            println!("{}", message.content);
        }
    }
}
