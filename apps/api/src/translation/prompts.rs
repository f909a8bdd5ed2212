// Translation prompt templates. All prompts for this module live here.

use crate::content::models::Language;

pub const TRANSLATION_SYSTEM: &str = "\
You are a professional translator for resume and portfolio copy. \
Translate Korean source text faithfully, keeping a professional business tone. \
Technical terms, company names, and proper nouns stay in their original form \
when they are commonly used internationally. \
Return ONLY the translated text — no explanations, no notes.";

/// Prompt for a single free-text field.
pub fn build_text_prompt(text: &str, target: Language, context: Option<&str>) -> String {
    let mut prompt = format!(
        "Translate the following Korean text into natural, professional {}.\n\n",
        target.english_name()
    );
    if let Some(context) = context {
        prompt.push_str(&format!("Context: {context}\n\n"));
    }
    prompt.push_str("Korean text to translate:\n");
    prompt.push_str(text);
    prompt
}

/// Prompt for a newline-joined list translated as one request.
/// The model must answer one line per input line, in order.
pub fn build_batch_prompt(items: &[String], target: Language, context: Option<&str>) -> String {
    let mut prompt = format!(
        "Translate the following Korean list items into natural, professional {}.\n\
         Keep the same order. Return exactly one translated line per input line, \
         without numbering or bullets.\n\n",
        target.english_name()
    );
    if let Some(context) = context {
        prompt.push_str(&format!("Context: {context}\n\n"));
    }
    prompt.push_str("Korean items to translate:\n");
    prompt.push_str(&items.join("\n"));
    prompt
}
