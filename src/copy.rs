//! Fixed copy deck for every wizard screen.
//!
//! All user-facing strings live here so the screens themselves stay pure
//! control flow. Tone is part of the product: provocative, direct, no
//! mystical fluff.

pub const HEADER: &str = "K-SAJU // SOUL CODE";
pub const BACK: &str = "GO BACK";

// ─── Category select ──────────────────────────────────────────────────────────

pub const MODE_TITLE: &str = "SPOILER ALERT.";
pub const MODE_SUBTITLE: &str =
    "Anxious about your crush? Scared about money? Stop guessing. Read the ending.";
pub const MODE_LOVE: &str = "CRUSH / FLIRTING / LOVE";
pub const MODE_MONEY: &str = "CAREER / MONEY / WEALTH";

// ─── Subject details ──────────────────────────────────────────────────────────

pub const USER_TITLE: &str = "WHO ARE YOU?";
pub const USER_SUBTITLE: &str = "Your birth chart reveals your glitches. Let's expose them.";
pub const USER_NAME_PH: &str = "Your Name";
pub const USER_CTA: &str = "NEXT >";

pub const PARTNER_TITLE: &str = "THEIR DETAILS";
pub const PARTNER_SUBTITLE: &str =
    "Enter the details of the person you're interested in to calculate odds.";
pub const PARTNER_NAME_PH: &str = "Their Name";
pub const PARTNER_CTA: &str = "CHECK COMPATIBILITY";

// ─── Situational context ──────────────────────────────────────────────────────

pub const CONTEXT_LOVE_TITLE: &str = "WHAT'S THE SITUATION? (Optional)";
pub const CONTEXT_LOVE_SUBTITLE: &str =
    "Dating? Crushing? Complicated? What specifically do you want to know?";
pub const CONTEXT_LOVE_PH: &str =
    "e.g., Just started dating, he's pulling away, is this long term?";
pub const CONTEXT_MONEY_TITLE: &str = "REALITY CHECK (Optional)";
pub const CONTEXT_MONEY_SUBTITLE: &str =
    "Burnout? Broke? Where does it hurt? Or skip to the answer.";
pub const CONTEXT_MONEY_PH: &str = "e.g., Hate my boss, stuck in junior role...";
pub const CONTEXT_CTA: &str = "DIG DEEPER";

// ─── Final question ───────────────────────────────────────────────────────────

pub const FINAL_TITLE: &str = "THE ELEPHANT IN THE ROOM (Optional)";
pub const FINAL_SUBTITLE: &str = "Ask the thing that keeps you up at night.";
pub const FINAL_LOVE_PH: &str = "Is he seeing someone else? Will he commit?";
pub const FINAL_MONEY_PH: &str = "Should I quit tomorrow? Will I fail?";
pub const FINAL_CTA: &str = "DECODE DESTINY";

// ─── Processing / failure ─────────────────────────────────────────────────────

pub const PROCESSING_TITLE: &str = "ACCESSING SOUL CODE...";
pub const PROCESSING_SUBTITLE: &str = "CALCULATING PROBABILITIES // 2026-2030";
pub const READING_FAILED: &str = "System interrupted. Energy field unstable. Please retry.";

// ─── Checkout ─────────────────────────────────────────────────────────────────

pub const CHECKOUT_ITEM_DESCRIPTION: &str = "K-SAJU // PREMIUM SOUL CODE";
pub const CHECKOUT_GATEWAY: &str = "SECURE GATEWAY // PAYPAL";
pub const CAPTURE_FAILED: &str = "Payment verification failed. Energy link unstable.";
pub const ENV_BLOCKED_TITLE: &str = "ENVIRONMENT BLOCKED";
pub const ENV_BLOCKED_BODY: &str =
    "Security policy detected. Open the approval link in a dedicated browser tab to authorize.";
pub const ENV_BLOCKED_RETRY: &str = "RETRY CONNECTION";

// ─── Share ────────────────────────────────────────────────────────────────────

pub const SHARE_TITLE: &str = "K-SAJU // THE SOUL CODE";
pub const SHARE_PREFIX: &str = "My K-SAJU Reading:";
