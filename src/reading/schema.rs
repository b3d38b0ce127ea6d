//! The fixed structured-output schema sent with every reading request.
//!
//! This mirrors [`super::Reading`] field for field. The model is told to
//! return JSON conforming to exactly this shape; anything else is treated as
//! a failed call.

use serde_json::{json, Value};

/// Build the `responseSchema` for the generate call.
///
/// `love_result` and `money_result` are both declared but neither is
/// required — the system instruction tells the model to fill exactly the one
/// matching the requested category. `locked_sections[].content` is optional
/// on the wire; the renderer never reads it while locked.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mode": { "type": "STRING", "description": "love or money" },
            "free": {
                "type": "OBJECT",
                "properties": {
                    "headline": { "type": "STRING" },
                    "one_liner": { "type": "STRING" },
                },
                "required": ["headline", "one_liner"],
            },
            "love_result": {
                "type": "OBJECT",
                "properties": {
                    "total_score": { "type": "INTEGER" },
                    "badge": { "type": "STRING" },
                    "summary": { "type": "STRING" },
                    "partner_instinctive_attraction": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "quote": { "type": "STRING" },
                            "why": { "type": "STRING" },
                        },
                        "required": ["title", "quote", "why"],
                    },
                    "score_breakdown": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "label": { "type": "STRING" },
                                "score": { "type": "INTEGER" },
                                "tier": { "type": "STRING" },
                            },
                            "required": ["label", "score", "tier"],
                        },
                    },
                    "locked_sections": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "id": { "type": "STRING" },
                                "title": { "type": "STRING" },
                                "preview_quote": { "type": "STRING" },
                                "content": { "type": "STRING" },
                            },
                            "required": ["id", "title", "preview_quote"],
                        },
                    },
                },
            },
            "money_result": {
                "type": "OBJECT",
                "properties": {
                    "risk_map_title": { "type": "STRING" },
                    "free_timeline": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "window": { "type": "STRING" },
                                "theme": { "type": "STRING" },
                                "best_action": { "type": "STRING" },
                                "avoid": { "type": "STRING" },
                            },
                            "required": ["window", "theme", "best_action", "avoid"],
                        },
                    },
                    "free_insight": { "type": "STRING" },
                    "locked": {
                        "type": "OBJECT",
                        "properties": {
                            "next_move_checklist": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "danger_zones": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "highest_roi_habit": { "type": "STRING" },
                        },
                        "required": ["next_move_checklist", "danger_zones", "highest_roi_habit"],
                    },
                },
            },
            "paywall": {
                "type": "OBJECT",
                "properties": {
                    "price_anchor": { "type": "STRING" },
                    "discount_price": { "type": "STRING" },
                    "cta": { "type": "STRING" },
                    "bullets": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "disclaimer": { "type": "STRING" },
                    "urgency": { "type": "STRING" },
                },
                "required": ["price_anchor", "discount_price", "cta", "bullets", "disclaimer", "urgency"],
            },
            "share_card": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "subtitle": { "type": "STRING" },
                    "tagline": { "type": "STRING" },
                    "cta": { "type": "STRING" },
                },
                "required": ["title", "subtitle", "tagline", "cta"],
            },
        },
        "required": ["mode", "free", "paywall", "share_card"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_required_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["mode", "free", "paywall", "share_card"]);
        // Neither variant payload is required — the instruction picks one.
        assert!(!required.contains(&"love_result"));
        assert!(!required.contains(&"money_result"));
    }

    #[test]
    fn locked_section_content_is_optional() {
        let schema = response_schema();
        let required = &schema["properties"]["love_result"]["properties"]["locked_sections"]
            ["items"]["required"];
        assert!(required.as_array().unwrap().iter().all(|v| v != "content"));
    }
}
