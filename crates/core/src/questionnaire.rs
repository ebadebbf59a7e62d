//! Questionnaire State Machine
//!
//! Drives the fixed five-step pitch interview. The cursor advances by exactly
//! one per accepted answer and clamps at `questions.len()` (the terminal
//! state). Question emission is an explicit transition triggered by `submit`,
//! guarded by an "already asked" index set so re-entrant callers (a UI that
//! renders twice, a retried request) cannot ask the same question twice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Greeting emitted when a session starts.
pub const GREETING: &str = "Hi! I'm your AI Pitch Assistant. Ready to craft the perfect pitch?";

/// The fixed interview questions, in order.
pub const QUESTIONS: [&str; 5] = [
    "What type of pitch are you creating?",
    "Who is your target audience?",
    "What problem does your product/service solve?",
    "What makes your solution unique?",
    "What tone would you like?",
];

/// Result of submitting one piece of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty or whitespace-only; nothing changed.
    Rejected,
    /// Answer accepted; the contained question should be emitted next.
    NextQuestion(String),
    /// Answer accepted; this question had already been emitted, so nothing
    /// new should be shown (re-entrant duplicate guard).
    NextQuestionAlreadyAsked,
    /// The final answer was accepted; the caller should assemble the
    /// compound prompt and invoke the completion gateway.
    Finalize,
    /// The interview already reached the terminal state; no-op.
    AlreadyComplete,
}

/// The linear questionnaire: fixed questions, accumulated answers, and a
/// monotonic cursor.
///
/// Invariant: `answers.len() == cursor` until the terminal state, where both
/// equal `questions.len()` and the answers are frozen as prompt-assembly
/// input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<String>,
    answers: Vec<String>,
    cursor: usize,
    asked: HashSet<usize>,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}

impl Questionnaire {
    /// Create a questionnaire over the standard five pitch questions.
    pub fn new() -> Self {
        Self::with_questions(QUESTIONS.iter().map(|q| q.to_string()).collect())
    }

    /// Create a questionnaire over a custom question list.
    pub fn with_questions(questions: Vec<String>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
            cursor: 0,
            asked: HashSet::new(),
        }
    }

    /// Begin the interview: returns the first question the first time it is
    /// called, `None` on every subsequent call.
    pub fn start(&mut self) -> Option<&str> {
        if self.questions.is_empty() || !self.asked.insert(0) {
            return None;
        }
        Some(&self.questions[0])
    }

    /// Submit one piece of user input and advance the machine.
    ///
    /// Empty or whitespace-only input is rejected without any state change.
    /// Submissions after the terminal state are no-ops.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Rejected;
        }
        if self.cursor >= self.questions.len() {
            return SubmitOutcome::AlreadyComplete;
        }

        self.answers.push(trimmed.to_string());
        self.cursor += 1;

        if self.cursor == self.questions.len() {
            return SubmitOutcome::Finalize;
        }

        if self.asked.insert(self.cursor) {
            SubmitOutcome::NextQuestion(self.questions[self.cursor].clone())
        } else {
            SubmitOutcome::NextQuestionAlreadyAsked
        }
    }

    /// Whether the interview has reached the terminal state.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// The answers accepted so far, in question order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Current cursor position (number of accepted answers).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The question list this interview runs over.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}
