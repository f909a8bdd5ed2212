// Chat prompt templates. All prompts for this module live here.

use crate::content::models::Language;

fn answer_language_instruction(language: Language) -> &'static str {
    match language {
        Language::Ko => "Answer in Korean.",
        Language::En => "Answer in English.",
        Language::Ja => "Answer in Japanese.",
    }
}

/// System instruction for one chat turn: the full serialized record is the
/// only ground truth the model may answer from.
pub fn build_system_instruction(context_json: &str, language: Language) -> String {
    format!(
        "You are an AI assistant representing the owner of this portfolio.\n\
         Your goal is to answer questions about their career, skills, and projects \
         based strictly on the provided resume data.\n\
         \n\
         Current language setting: {language}\n\
         {instruction}\n\
         \n\
         Resume data:\n\
         {context_json}\n\
         \n\
         Guidelines:\n\
         1. Be professional, concise, and polite.\n\
         2. If the answer is not in the data, state that you don't have that specific information.\n\
         3. Highlight key achievements (numbers, KPIs) when relevant.\n\
         4. Adopt a tone that is confident yet humble.",
        instruction = answer_language_instruction(language),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_carries_language_and_context() {
        let system = build_system_instruction("{\"projects\": []}", Language::En);
        assert!(system.contains("Answer in English."));
        assert!(system.contains("{\"projects\": []}"));
    }

    #[test]
    fn test_each_language_gets_its_own_instruction() {
        let ko = build_system_instruction("{}", Language::Ko);
        let ja = build_system_instruction("{}", Language::Ja);
        assert!(ko.contains("Answer in Korean."));
        assert!(ja.contains("Answer in Japanese."));
    }
}
