//! Prompt Assembly and Reply Splitting
//!
//! Builds the compound natural-language prompt from the five interview
//! answers, and splits the provider's reply into the pitch line and the
//! follow-up block. Both are pure functions: the split behavior (first
//! non-blank line vs. the rest) is a contract the conversation layer depends
//! on, so it lives here rather than inline in the session code.

/// Fixed labels under which the answers are embedded, in question order.
const ANSWER_LABELS: [&str; 5] = [
    "Pitch type",
    "Target audience",
    "Problem it solves",
    "Unique selling point",
    "Tone",
];

/// Instruction wrapped around the user prompt.
const SYSTEM_INSTRUCTION: &str = "You are an AI that helps users write professional business \
pitches. Return only the pitch in one paragraph. Then on a separate line, say: 'If you'd like \
to change or improve the pitch, feel free to type below.'";

/// Follow-up substituted when the provider's reply has no second line.
pub const DEFAULT_FOLLOWUP: &str =
    "If you'd like to change or improve the pitch, feel free to type below.";

/// User-safe fallback appended when the completion gateway fails.
pub const GENERATION_FAILED: &str = "Sorry, I couldn't generate the pitch.";

/// Assemble the compound prompt from the five answers.
///
/// Answers are embedded under fixed numbered labels in question order and
/// wrapped with the fixed system instruction. Callers must pass exactly the
/// accepted answers; missing trailing answers render as empty labels rather
/// than panicking.
pub fn assemble_pitch_prompt(answers: &[String]) -> String {
    let mut body = String::from("Please write a business pitch based on the following:");
    for (i, label) in ANSWER_LABELS.iter().enumerate() {
        let answer = answers.get(i).map(String::as_str).unwrap_or("");
        body.push_str(&format!("\n{}. {}: {}", i + 1, label, answer));
    }
    format!("{SYSTEM_INSTRUCTION}\n\nUser prompt:\n{body}")
}

/// Assemble a revision prompt from an existing pitch and user feedback.
///
/// Used for turns after the questionnaire is complete, when the user types
/// below the generated pitch to change or improve it.
pub fn assemble_revision_prompt(pitch: &str, feedback: &str) -> String {
    format!(
        "{SYSTEM_INSTRUCTION}\n\nUser prompt:\nHere is the current pitch:\n{pitch}\n\n\
         Please revise it based on this feedback:\n{feedback}"
    )
}

/// Split a provider reply into the pitch and the follow-up.
///
/// Blank lines are discarded. The first non-blank line is the pitch; the
/// remaining non-blank lines, re-joined with newlines, form the follow-up.
/// When no follow-up text remains (including a reply of only blank lines),
/// [`DEFAULT_FOLLOWUP`] is substituted. A fully blank reply yields the
/// failure fallback as the pitch so the conversation stays alive.
pub fn split_reply_into_pitch_and_followup(reply: &str) -> (String, String) {
    let mut lines = reply.lines().filter(|line| !line.trim().is_empty());

    let pitch = lines
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| GENERATION_FAILED.to_string());

    let rest: Vec<&str> = lines.collect();
    let followup = if rest.is_empty() {
        DEFAULT_FOLLOWUP.to_string()
    } else {
        rest.join("\n")
    };

    (pitch, followup)
}
