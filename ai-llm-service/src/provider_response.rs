//! Provider response kept exactly as the provider sent it.
//!
//! The HTTP layer relays this body to its own callers, so the provider's schema
//! is an external contract: the wrapper validates that the body is JSON and
//! otherwise does not reshape it. Typed accessors exist for logging only.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Raw JSON body returned by the chat-completion provider.
///
/// Serializes to the original bytes (no key reordering, no field dropping).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderResponse(Box<RawValue>);

impl ProviderResponse {
    /// Validates `body` as JSON and keeps it verbatim.
    pub fn from_json_str(body: &str) -> Result<Self, serde_json::Error> {
        RawValue::from_string(body.to_string()).map(Self)
    }

    /// The verbatim JSON text.
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// `choices[0].message.content`, if the provider produced an answer.
    pub fn answer(&self) -> Option<String> {
        #[derive(Deserialize)]
        struct Shape {
            #[serde(default)]
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Option<Message>,
        }
        #[derive(Deserialize)]
        struct Message {
            content: Option<String>,
        }

        serde_json::from_str::<Shape>(self.as_str())
            .ok()?
            .choices
            .into_iter()
            .next()?
            .message?
            .content
    }

    /// `error.message`, if the provider reported an application-level failure
    /// (quota exceeded, invalid model, ...).
    pub fn error_message(&self) -> Option<String> {
        #[derive(Deserialize)]
        struct Shape {
            error: Option<ErrorBody>,
        }
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        serde_json::from_str::<Shape>(self.as_str())
            .ok()?
            .error?
            .message
    }
}
