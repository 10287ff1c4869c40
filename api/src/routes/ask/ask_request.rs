use serde::Deserialize;

/// Request payload for /ask.
///
/// `question` is optional at the type level so a missing field and an
/// explicit `null` reach the handler and get the same 400 as a blank one.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl AskRequest {
    /// The question if it has any non-whitespace content, as sent.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().filter(|q| !q.trim().is_empty())
    }
}
