//! Chat turn handler — answers one visitor question from the current
//! content record. Stateless: every turn is independent, and the caller
//! re-supplies whatever context it wants carried over.

use tracing::error;

use crate::chat::prompts::build_system_instruction;
use crate::content::models::{ContentRecord, Language};
use crate::llm_client::LlmClient;

/// Answers a visitor question grounded in `record`, in `language`.
///
/// This function cannot fail: any adapter error degrades to a fixed
/// apologetic message in the active language, so the chat UI renders an
/// error bubble instead of crashing.
pub async fn answer_question(
    llm: &LlmClient,
    record: &ContentRecord,
    language: Language,
    question: &str,
) -> String {
    let context = match serde_json::to_string_pretty(record) {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "failed to serialize record for chat context");
            return fallback_message(language).to_string();
        }
    };

    let system = build_system_instruction(&context, language);
    match llm.call_text(question, &system).await {
        Ok(answer) => answer,
        Err(e) => {
            error!(error = %e, "chat completion failed");
            fallback_message(language).to_string()
        }
    }
}

/// The fixed degraded-mode reply, per language.
pub fn fallback_message(language: Language) -> &'static str {
    match language {
        Language::Ko => "현재 AI 서비스 연결이 원활하지 않습니다. 잠시 후 다시 시도해주세요.",
        Language::En => "The AI assistant is temporarily unavailable. Please try again in a moment.",
        Language::Ja => "現在AIサービスへの接続が不安定です。しばらくしてからもう一度お試しください。",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_messages_are_localized() {
        let messages = [
            fallback_message(Language::Ko),
            fallback_message(Language::En),
            fallback_message(Language::Ja),
        ];
        assert!(messages.iter().all(|m| !m.is_empty()));
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }
}
