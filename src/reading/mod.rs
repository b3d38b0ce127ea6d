//! Reading Request Builder — the structured reading and the client that
//! fetches it.
//!
//! The reading itself is computed entirely by the external model; this module
//! contributes the prompt, the fixed response schema, and the parse. Exactly
//! one of the two category payloads is populated per reading, matching the
//! Answer Set's category.

pub mod client;
pub mod prompts;
pub mod schema;

use serde::{Deserialize, Serialize};

pub use client::{GeminiClient, ReadingBackend, ReadingError};

/// Wire value of the reading's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    Love,
    Money,
}

/// The always-visible portion of the reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeBlock {
    pub headline: String,
    pub one_liner: String,
}

/// One bar of the love-compatibility breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub label: String,
    pub score: i64,
    /// "Low" | "Okay" | "High" — free text from the model, rendered as-is.
    pub tier: String,
}

/// The attention-grab block at the top of a love reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstinctiveAttraction {
    pub title: String,
    pub quote: String,
    pub why: String,
}

/// A named portion of the love result whose full content is withheld until
/// the unlock flag is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockedSection {
    pub id: String,
    pub title: String,
    pub preview_quote: String,
    /// Absent or ignored while locked; the renderer never reads it before
    /// unlock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Two-subject compatibility payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoveResult {
    pub total_score: i64,
    pub badge: String,
    pub summary: String,
    pub partner_instinctive_attraction: InstinctiveAttraction,
    pub score_breakdown: Vec<ScoreBreakdown>,
    pub locked_sections: Vec<LockedSection>,
}

/// One window of the money reading's free timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub window: String,
    pub theme: String,
    pub best_action: String,
    pub avoid: String,
}

/// The money reading's gated block, hidden wholesale until unlock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyLocked {
    pub next_move_checklist: Vec<String>,
    pub danger_zones: Vec<String>,
    pub highest_roi_habit: String,
}

/// Single-subject career/wealth payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyResult {
    pub risk_map_title: String,
    pub free_timeline: Vec<TimelineEvent>,
    pub free_insight: String,
    pub locked: MoneyLocked,
}

/// Paywall copy generated alongside the reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaywallCopy {
    pub price_anchor: String,
    pub discount_price: String,
    pub cta: String,
    pub bullets: Vec<String>,
    pub disclaimer: String,
    pub urgency: String,
}

/// Share-card copy shown after unlock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareCard {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub cta: String,
}

/// The parsed structured response from the model.
///
/// Created once per successful call, never mutated afterwards — only its
/// visibility (locked vs. unlocked) changes, and that lives in the paywall
/// gate, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub mode: ReadingMode,
    pub free: FreeBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub love_result: Option<LoveResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_result: Option<MoneyResult>,
    pub paywall: PaywallCopy,
    pub share_card: ShareCard,
}
