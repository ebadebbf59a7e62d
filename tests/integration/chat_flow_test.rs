//! Chat Flow Integration Tests
//!
//! Drives the complete five-question interview through `ChatSession` against
//! stub providers: transcript shape, prompt assembly, the single gateway
//! call on finalization, and graceful degradation when the gateway fails.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pitch_writer::ChatSession;
use pitch_writer_core::{
    MessageRole, DEFAULT_FOLLOWUP, GENERATION_FAILED, GREETING, QUESTIONS,
};
use pitch_writer_llm::{
    CompletionError, CompletionProvider, CompletionReply, CompletionResult, ProviderConfig,
};

// ============================================================================
// Helpers
// ============================================================================

const ANSWERS: [&str; 5] = [
    "Investor Pitch",
    "Investors",
    "No clean water access",
    "Solar-powered filtration",
    "Professional",
];

struct StubProvider {
    reply: CompletionResult<CompletionReply>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    config: ProviderConfig,
}

impl StubProvider {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(CompletionReply {
                reply: reply.to_string(),
                model: Some("openai/gpt-3.5-turbo".to_string()),
            }),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            config: ProviderConfig::default(),
        })
    }

    fn failing(error: CompletionError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            config: ProviderConfig::default(),
        })
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, prompt: &str) -> CompletionResult<CompletionReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone()
    }

    async fn health_check(&self) -> CompletionResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

async fn run_interview(session: &mut ChatSession) {
    for answer in ANSWERS {
        session.submit(answer).await.unwrap();
    }
}

// ============================================================================
// Conversation flow
// ============================================================================

#[tokio::test]
async fn test_interview_emits_greeting_and_questions_in_order() {
    let provider = StubProvider::replying("Great pitch.\nFeel free to edit.");
    let mut session = ChatSession::new(provider);

    session.start();
    run_interview(&mut session).await;

    let assistant_lines: Vec<&str> = session
        .transcript()
        .iter()
        .filter(|m| m.role == MessageRole::Assistant)
        .map(|m| m.content.as_str())
        .collect();

    // Greeting, five questions, pitch, follow-up
    assert_eq!(assistant_lines.len(), 8);
    assert_eq!(assistant_lines[0], GREETING);
    for (i, question) in QUESTIONS.iter().enumerate() {
        assert_eq!(assistant_lines[1 + i], *question);
    }
    assert_eq!(assistant_lines[6], "Great pitch.");
    assert_eq!(assistant_lines[7], "Feel free to edit.");
}

#[tokio::test]
async fn test_transcript_is_append_only_and_interleaved() {
    let provider = StubProvider::replying("Great pitch.\nFeel free to edit.");
    let mut session = ChatSession::new(provider);
    session.start();

    let mut lengths = vec![session.transcript().len()];
    for answer in ANSWERS {
        session.submit(answer).await.unwrap();
        lengths.push(session.transcript().len());
    }

    // Lengths only grow; every message keeps its position.
    assert!(lengths.windows(2).all(|w| w[0] < w[1]));
    let user_contents: Vec<&str> = session
        .transcript()
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(user_contents, ANSWERS);
}

#[tokio::test]
async fn test_finalization_makes_exactly_one_gateway_call() {
    let provider = StubProvider::replying("Great pitch.\nFeel free to edit.");
    let mut session = ChatSession::new(provider.clone());
    session.start();

    for answer in &ANSWERS[..4] {
        session.submit(answer).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
    session.submit(ANSWERS[4]).await.unwrap();
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

    // Terminal-state blank input must not trigger another call.
    session.submit("").await.unwrap();
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_compound_prompt_embeds_all_answers_under_labels() {
    let provider = StubProvider::replying("Great pitch.");
    let mut session = ChatSession::new(provider.clone());
    session.start();
    run_interview(&mut session).await;

    let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("1. Pitch type: Investor Pitch"));
    assert!(prompt.contains("2. Target audience: Investors"));
    assert!(prompt.contains("3. Problem it solves: No clean water access"));
    assert!(prompt.contains("4. Unique selling point: Solar-powered filtration"));
    assert!(prompt.contains("5. Tone: Professional"));
}

#[tokio::test]
async fn test_multi_line_reply_splits_into_pitch_and_followup() {
    let provider = StubProvider::replying("Line A\nLine B\nLine C");
    let mut session = ChatSession::new(provider);
    session.start();
    run_interview(&mut session).await;

    assert_eq!(session.pitch(), Some("Line A"));
    let last = session.transcript().last().unwrap();
    assert_eq!(last.content, "Line B\nLine C");
}

#[tokio::test]
async fn test_single_line_reply_uses_default_followup() {
    let provider = StubProvider::replying("Just the one paragraph.");
    let mut session = ChatSession::new(provider);
    session.start();
    run_interview(&mut session).await;

    let last = session.transcript().last().unwrap();
    assert_eq!(last.content, DEFAULT_FOLLOWUP);
}

#[tokio::test]
async fn test_blank_answers_change_nothing() {
    let provider = StubProvider::replying("unused");
    let mut session = ChatSession::new(provider.clone());
    session.start();

    for blank in ["", "   ", "\t", "\n"] {
        let appended = session.submit(blank).await.unwrap();
        assert!(appended.is_empty());
    }
    assert_eq!(session.transcript().len(), 2);
    assert!(!session.is_complete());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Gateway failure degradation
// ============================================================================

#[tokio::test]
async fn test_gateway_failure_appends_fallback_message() {
    let provider = StubProvider::failing(CompletionError::ServerError {
        message: "upstream exploded".to_string(),
        status: Some(500),
    });
    let mut session = ChatSession::new(provider);
    session.start();
    run_interview(&mut session).await;

    let last = session.transcript().last().unwrap();
    assert_eq!(last.role, MessageRole::Assistant);
    assert_eq!(last.content, GENERATION_FAILED);
    // The questionnaire reached its terminal state regardless.
    assert!(session.is_complete());
}

#[tokio::test]
async fn test_session_usable_after_gateway_failure() {
    let provider = StubProvider::failing(CompletionError::NetworkError {
        message: "connection refused".to_string(),
    });
    let mut session = ChatSession::new(provider.clone());
    session.start();
    run_interview(&mut session).await;

    let appended = session.submit("please retry").await.unwrap();
    assert!(!appended.is_empty());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}
