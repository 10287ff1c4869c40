//! Prompt builder: fixed system message + question with the full context.

use ai_llm_service::ChatPrompt;

/// The two messages sent to the completion provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptEnvelope {
    pub system: String,
    pub user: String,
}

impl PromptEnvelope {
    /// User content is `Question: <question>\nContext:\n<context>`, with the
    /// question and context embedded literally. No length check is made.
    ///
    /// # Example
    /// ```
    /// # use contextor::prompt::PromptEnvelope;
    /// let env = PromptEnvelope::new("Be kind.", "What is PSA?", "PSA is ...");
    /// assert_eq!(env.user, "Question: What is PSA?\nContext:\nPSA is ...");
    /// ```
    pub fn new(system: &str, question: &str, context: &str) -> Self {
        Self {
            system: system.to_string(),
            user: format!("Question: {question}\nContext:\n{context}"),
        }
    }
}

impl From<PromptEnvelope> for ChatPrompt {
    fn from(env: PromptEnvelope) -> Self {
        ChatPrompt {
            system: env.system,
            user: env.user,
        }
    }
}
