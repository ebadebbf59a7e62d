//! Chat Session
//!
//! One interview conversation: an append-only transcript, the questionnaire
//! state machine, and the completion provider used for finalization and
//! pitch revisions. Each method returns the messages it appended so callers
//! can render just the new turn.

use std::sync::Arc;

use pitch_writer_core::{
    assemble_pitch_prompt, assemble_revision_prompt, split_reply_into_pitch_and_followup,
    Message, Questionnaire, SubmitOutcome, GENERATION_FAILED, GREETING,
};
use pitch_writer_llm::CompletionProvider;

use crate::utils::error::AppResult;

/// A single interview conversation
pub struct ChatSession {
    questionnaire: Questionnaire,
    transcript: Vec<Message>,
    pitch: Option<String>,
    provider: Arc<dyn CompletionProvider>,
}

impl ChatSession {
    /// Create a new session over the standard five questions
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            questionnaire: Questionnaire::new(),
            transcript: Vec::new(),
            pitch: None,
            provider,
        }
    }

    /// Begin the interview: emits the greeting and the first question.
    ///
    /// Idempotent; repeated calls append nothing.
    pub fn start(&mut self) -> Vec<Message> {
        let mut appended = Vec::new();
        if let Some(question) = self.questionnaire.start() {
            let question = question.to_string();
            appended.push(Message::assistant(GREETING));
            appended.push(Message::assistant(&question));
        }
        self.transcript.extend(appended.iter().cloned());
        appended
    }

    /// Submit one piece of user input and advance the conversation.
    ///
    /// Gateway failures during finalization or revision do not error the
    /// session; the fixed fallback message is appended and the conversation
    /// stays usable.
    pub async fn submit(&mut self, input: &str) -> AppResult<Vec<Message>> {
        if self.questionnaire.is_complete() {
            return self.submit_revision(input).await;
        }

        let mut appended = Vec::new();
        match self.questionnaire.submit(input) {
            SubmitOutcome::Rejected => {}
            SubmitOutcome::NextQuestion(question) => {
                appended.push(Message::user(input.trim()));
                appended.push(Message::assistant(&question));
            }
            SubmitOutcome::NextQuestionAlreadyAsked => {
                appended.push(Message::user(input.trim()));
            }
            SubmitOutcome::Finalize => {
                appended.push(Message::user(input.trim()));
                let prompt = assemble_pitch_prompt(self.questionnaire.answers());
                appended.extend(self.generate(&prompt).await);
            }
            // is_complete was checked above
            SubmitOutcome::AlreadyComplete => {}
        }

        self.transcript.extend(appended.iter().cloned());
        Ok(appended)
    }

    /// Handle input after the interview is complete: treat it as feedback on
    /// the generated pitch and request a revision.
    async fn submit_revision(&mut self, input: &str) -> AppResult<Vec<Message>> {
        let feedback = input.trim();
        if feedback.is_empty() {
            return Ok(Vec::new());
        }

        let mut appended = vec![Message::user(feedback)];
        let current = self.pitch.clone().unwrap_or_default();
        let prompt = assemble_revision_prompt(&current, feedback);
        appended.extend(self.generate(&prompt).await);

        self.transcript.extend(appended.iter().cloned());
        Ok(appended)
    }

    /// Run one completion and turn the reply into transcript messages.
    async fn generate(&mut self, prompt: &str) -> Vec<Message> {
        match self.provider.complete(prompt).await {
            Ok(completion) => {
                let (pitch, followup) = split_reply_into_pitch_and_followup(&completion.reply);
                self.pitch = Some(pitch.clone());
                vec![Message::assistant(&pitch), Message::assistant(&followup)]
            }
            Err(err) => {
                tracing::error!(error = %err, "pitch generation failed");
                vec![Message::assistant(GENERATION_FAILED)]
            }
        }
    }

    /// The full conversation transcript, in insertion order
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Whether all five questions have been answered
    pub fn is_complete(&self) -> bool {
        self.questionnaire.is_complete()
    }

    /// Whether the next accepted answer will trigger pitch generation
    pub fn on_final_question(&self) -> bool {
        let total = self.questionnaire.questions().len();
        total > 0 && self.questionnaire.cursor() == total - 1
    }

    /// The most recently generated pitch, if any
    pub fn pitch(&self) -> Option<&str> {
        self.pitch.as_deref()
    }
}
