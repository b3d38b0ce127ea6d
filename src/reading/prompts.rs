//! Prompt text for the reading request.
//!
//! Two pieces: a fixed system instruction (persona, tone, pricing, schema
//! directive) and a per-request prompt embedding the serialized Answer Set
//! as data.

use chrono::{Datelike, Utc};

use crate::wizard::answers::AnswerSet;

/// Anchor price quoted in the system instruction and paywall copy.
pub const PRICE_ANCHOR: &str = "$10.99";
/// Discounted price; must match the checkout amount.
pub const PRICE_DISCOUNT: &str = "$5.00";

/// The fixed persona/tone directives plus the structured-output declaration.
pub fn system_instruction() -> String {
    // Predictions always start from next calendar year.
    let prediction_start = Utc::now().year() + 1;
    format!(
        "You are K-Saju, a modern, edgy, MZ-style reading assistant.\n\
         Tone: Provocative, Direct, \"Risk-Avoidant\", Casual, Young. English Language Only.\n\
         Avoid: Mystical fluff, old-fashioned fortune-teller speech. English Only.\n\
         \n\
         CRITICAL: You MUST provide a JSON response exactly matching the schema.\n\
         Prediction start: {prediction_start}.\n\
         Pricing: {PRICE_ANCHOR} (Anchor) -> {PRICE_DISCOUNT} (Discount).\n\
         \n\
         If LOVE mode: Provide detailed compatibility scores and 4 locked sections.\n\
         If MONEY mode: Provide 2X longer, actionable career/wealth insights."
    )
}

/// The per-request prompt. Serialization failure is impossible for
/// [`AnswerSet`] (plain strings and enums), so this is infallible.
pub fn reading_prompt(answers: &AnswerSet) -> String {
    let profile = serde_json::to_string(answers).unwrap_or_default();
    format!(
        "Generate a detailed K-Saju reading for the following profile: {profile}. \
         If a finalQuestion is provided, address it directly in the free summary. \
         Provide all data for both free and locked sections."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::answers::Category;

    #[test]
    fn prompt_embeds_the_full_answer_set() {
        let mut answers = AnswerSet::new();
        answers.mode = Some(Category::Love);
        answers.user.name = "A".to_string();
        answers.final_question = "Will he commit?".to_string();

        let prompt = reading_prompt(&answers);
        assert!(prompt.contains("\"mode\":\"LOVE\""));
        assert!(prompt.contains("Will he commit?"));
        assert!(prompt.contains("finalQuestion"));
    }

    #[test]
    fn instruction_carries_pricing_and_schema_directive() {
        let instruction = system_instruction();
        assert!(instruction.contains(PRICE_ANCHOR));
        assert!(instruction.contains(PRICE_DISCOUNT));
        assert!(instruction.contains("exactly matching the schema"));
    }
}
