//! Processing-screen flow: the reading call joined with a minimum display
//! duration.
//!
//! The processing screen must never flash for an imperceptibly short moment,
//! so the backend call races nothing — it is *joined* with a fixed sleep.
//! Both complete before this returns; only the call's outcome determines
//! success. The timer cannot fail, and neither side cancels the other.

use std::time::Duration;

use tracing::warn;

use crate::reading::{Reading, ReadingBackend, ReadingError};
use crate::wizard::answers::AnswerSet;

/// Fetch a reading, holding the processing screen for at least `min_wait`.
///
/// On failure no partial result exists; the caller resets the wizard to the
/// category-select screen and shows a generic retry message. The Answer Set
/// is never touched here.
pub async fn fetch_reading(
    backend: &dyn ReadingBackend,
    answers: &AnswerSet,
    min_wait: Duration,
) -> Result<Reading, ReadingError> {
    let (outcome, ()) = tokio::join!(backend.generate(answers), tokio::time::sleep(min_wait));
    if let Err(e) = &outcome {
        warn!("reading request failed: {e}");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{FreeBlock, PaywallCopy, ReadingMode, ShareCard};
    use async_trait::async_trait;
    use tokio::time::Instant;

    struct InstantBackend(Result<(), ()>);

    #[async_trait]
    impl ReadingBackend for InstantBackend {
        async fn generate(&self, _answers: &AnswerSet) -> Result<Reading, ReadingError> {
            match self.0 {
                Ok(()) => Ok(Reading {
                    mode: ReadingMode::Money,
                    free: FreeBlock {
                        headline: "H".into(),
                        one_liner: "O".into(),
                    },
                    love_result: None,
                    money_result: None,
                    paywall: PaywallCopy {
                        price_anchor: "$10.99".into(),
                        discount_price: "$5.00".into(),
                        cta: "GO".into(),
                        bullets: vec![],
                        disclaimer: String::new(),
                        urgency: String::new(),
                    },
                    share_card: ShareCard {
                        title: String::new(),
                        subtitle: String::new(),
                        tagline: String::new(),
                        cta: String::new(),
                    },
                }),
                Err(()) => Err(ReadingError::EmptyResponse),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_out_the_minimum_even_when_the_call_is_instant() {
        let started = Instant::now();
        let wait = Duration::from_millis(200);
        fetch_reading(&InstantBackend(Ok(())), &AnswerSet::new(), wait)
            .await
            .unwrap();
        // Paused tokio time auto-advances across the sleep, so the virtual
        // clock must have moved by at least the minimum wait.
        assert!(started.elapsed() >= wait);
    }

    #[tokio::test]
    async fn failure_passes_through_after_the_timer() {
        let err = fetch_reading(
            &InstantBackend(Err(())),
            &AnswerSet::new(),
            Duration::from_millis(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ReadingError::EmptyResponse));
    }
}
