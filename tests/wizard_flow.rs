//! End-to-end wizard flow against a stub reading backend.
//!
//! Covers:
//! 1. Two-subject happy path: submit → processing → results with the love
//!    payload populated and the money payload absent
//! 2. Failed reading: wizard resets to category select, answers untouched
//! 3. Category flows differ by exactly one screen

use async_trait::async_trait;
use std::time::Duration;

use soulcode::flow::fetch_reading;
use soulcode::reading::{
    FreeBlock, InstinctiveAttraction, LockedSection, LoveResult, PaywallCopy, Reading,
    ReadingBackend, ReadingError, ReadingMode, ShareCard,
};
use soulcode::wizard::answers::{AnswerSet, Category, DatePart};
use soulcode::wizard::{Screen, Subject, WizardEvent, WizardState};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn love_reading() -> Reading {
    Reading {
        mode: ReadingMode::Love,
        free: FreeBlock {
            headline: "SPOILER".into(),
            one_liner: "He already knows.".into(),
        },
        love_result: Some(LoveResult {
            total_score: 73,
            badge: "HIGH VOLTAGE".into(),
            summary: "S".into(),
            partner_instinctive_attraction: InstinctiveAttraction {
                title: "T".into(),
                quote: "Q".into(),
                why: "W".into(),
            },
            score_breakdown: vec![],
            locked_sections: vec![LockedSection {
                id: "s1".into(),
                title: "The Ending".into(),
                preview_quote: "It starts in March".into(),
                content: None,
            }],
        }),
        money_result: None,
        paywall: PaywallCopy {
            price_anchor: "$10.99".into(),
            discount_price: "$5.00".into(),
            cta: "UNLOCK".into(),
            bullets: vec!["bullet".into()],
            disclaimer: "d".into(),
            urgency: "u".into(),
        },
        share_card: ShareCard {
            title: "t".into(),
            subtitle: "s".into(),
            tagline: "g".into(),
            cta: "c".into(),
        },
    }
}

struct StubBackend {
    fail: bool,
}

#[async_trait]
impl ReadingBackend for StubBackend {
    async fn generate(&self, answers: &AnswerSet) -> Result<Reading, ReadingError> {
        assert_eq!(answers.mode, Some(Category::Love));
        if self.fail {
            Err(ReadingError::EmptyResponse)
        } else {
            Ok(love_reading())
        }
    }
}

/// Walk the love wizard up to the submit point with both subjects filled.
fn filled_love_wizard() -> WizardState {
    let mut w = WizardState::new();
    w.apply(WizardEvent::SelectCategory(Category::Love));

    w.answers.user.name = "A".into();
    w.answers.user.set_date_part(DatePart::Year, "1990");
    w.answers.user.set_date_part(DatePart::Month, "05");
    w.answers.user.set_date_part(DatePart::Day, "12");
    assert!(w.answers.user.is_ready());
    w.apply(WizardEvent::Advance);

    let partner = w.answers.ensure_partner();
    partner.name = "B".into();
    partner.set_date_part(DatePart::Year, "1992");
    partner.set_date_part(DatePart::Month, "11");
    partner.set_date_part(DatePart::Day, "03");
    assert!(w.answers.partner.as_ref().unwrap().is_ready());
    w.apply(WizardEvent::Advance);

    // Context and final question left blank on purpose.
    w.apply(WizardEvent::Advance);
    w
}

// ─── Test 1: two-subject happy path ──────────────────────────────────────────

#[tokio::test]
async fn two_subject_submit_reaches_results_with_love_payload() {
    let mut w = filled_love_wizard();
    assert_eq!(w.screen(), Screen::FinalQuestion);

    w.apply(WizardEvent::Submit);
    assert_eq!(w.screen(), Screen::Processing);

    let reading = fetch_reading(
        &StubBackend { fail: false },
        &w.answers,
        Duration::from_millis(1),
    )
    .await
    .unwrap();
    w.apply(WizardEvent::ReadingReady);

    assert_eq!(w.screen(), Screen::Results);
    assert_eq!(reading.mode, ReadingMode::Love);
    assert!(reading.love_result.is_some());
    assert!(reading.money_result.is_none());
}

// ─── Test 2: failed reading resets position, keeps answers ───────────────────

#[tokio::test]
async fn failed_reading_resets_to_category_select_and_keeps_answers() {
    let mut w = filled_love_wizard();
    w.apply(WizardEvent::Submit);
    let answers_before = w.answers.clone();

    let outcome = fetch_reading(
        &StubBackend { fail: true },
        &w.answers,
        Duration::from_millis(1),
    )
    .await;
    assert!(outcome.is_err());
    w.apply(WizardEvent::ReadingFailed);

    assert_eq!(w.position(), 0);
    assert_eq!(w.answers, answers_before);
    // Position 0 is category select in every flow.
    assert_eq!(w.screen(), Screen::CategorySelect);
}

// ─── Test 3: love has exactly one extra screen ───────────────────────────────

#[test]
fn love_flow_is_one_screen_longer_than_money() {
    let mut love = WizardState::new();
    love.apply(WizardEvent::SelectCategory(Category::Love));
    let mut money = WizardState::new();
    money.apply(WizardEvent::SelectCategory(Category::Money));

    assert_eq!(love.total_steps(), money.total_steps() + 1);

    // Position 2 differs: love is still collecting the partner, money has
    // moved on to context.
    love.apply(WizardEvent::Advance);
    money.apply(WizardEvent::Advance);
    assert_eq!(love.screen(), Screen::SubjectDetails(Subject::Partner));
    assert_eq!(money.screen(), Screen::Context);
}
