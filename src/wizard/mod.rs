//! Wizard State Machine — which screen is showing and why.
//!
//! The flow is an explicit transition table: each category owns a fixed,
//! ordered sequence of [`Screen`]s, and the step position is an index into
//! that sequence. Deriving the screen from (category, position) is a pure
//! function, so the whole machine is unit-testable without a terminal.
//!
//! No operation here ever fails. Invalid or partial input simply keeps the
//! subject screen's readiness predicate false, which disables forward
//! progress in the consuming view.

pub mod answers;

use serde::Serialize;

use answers::{AnswerSet, Category};

/// Which subject a details screen edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    You,
    Partner,
}

/// The finite set of screens the wizard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    CategorySelect,
    SubjectDetails(Subject),
    Context,
    FinalQuestion,
    Processing,
    Results,
}

/// Ordered screen sequence for the two-subject (love) category.
const FLOW_LOVE: &[Screen] = &[
    Screen::CategorySelect,
    Screen::SubjectDetails(Subject::You),
    Screen::SubjectDetails(Subject::Partner),
    Screen::Context,
    Screen::FinalQuestion,
    Screen::Processing,
    Screen::Results,
];

/// Ordered screen sequence for the single-subject (money) category.
const FLOW_MONEY: &[Screen] = &[
    Screen::CategorySelect,
    Screen::SubjectDetails(Subject::You),
    Screen::Context,
    Screen::FinalQuestion,
    Screen::Processing,
    Screen::Results,
];

/// The screen sequence for a category.
pub fn flow(category: Category) -> &'static [Screen] {
    match category {
        Category::Love => FLOW_LOVE,
        Category::Money => FLOW_MONEY,
    }
}

/// Events the wizard reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Pick a category. Valid only on the category-select screen.
    SelectCategory(Category),
    /// Move one screen forward.
    Advance,
    /// Move one screen back, floored at the category-select screen.
    Retreat,
    /// Final-screen submit: jump straight to the processing screen.
    Submit,
    /// The reading arrived: processing screen gives way to results.
    ReadingReady,
    /// The reading failed: reset to category select. Answers are kept.
    ReadingFailed,
}

/// Current wizard position plus the accumulated answers.
///
/// A plain value type with pure transitions — nothing here touches the
/// terminal or the network.
#[derive(Debug, Clone)]
pub struct WizardState {
    position: usize,
    pub answers: AnswerSet,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            position: 0,
            answers: AnswerSet::new(),
        }
    }

    /// Zero-based step position. Position 0 always means "category not yet
    /// chosen".
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of screens in the current category's flow (love has one more
    /// than money). Before a category is chosen only the first screen exists.
    pub fn total_steps(&self) -> usize {
        match self.answers.mode {
            Some(c) => flow(c).len(),
            None => 1,
        }
    }

    /// The screen to render right now.
    ///
    /// With no category chosen this is always the category-select screen,
    /// whatever the position says. Past-the-end positions clamp to the last
    /// screen so a stray advance can never render nothing.
    pub fn screen(&self) -> Screen {
        let Some(category) = self.answers.mode else {
            return Screen::CategorySelect;
        };
        let screens = flow(category);
        screens[self.position.min(screens.len() - 1)]
    }

    /// True while the user can still navigate backwards (not on the first
    /// screen and not past the submit point).
    pub fn can_retreat(&self) -> bool {
        self.position > 0 && !matches!(self.screen(), Screen::Processing | Screen::Results)
    }

    /// Apply one event. Invalid events for the current screen are no-ops.
    pub fn apply(&mut self, event: WizardEvent) {
        match event {
            WizardEvent::SelectCategory(category) => {
                if self.position == 0 {
                    self.answers.mode = Some(category);
                    self.position = 1;
                }
            }
            WizardEvent::Advance => {
                self.position += 1;
            }
            WizardEvent::Retreat => {
                self.position = self.position.saturating_sub(1);
            }
            WizardEvent::Submit => {
                if let Some(category) = self.answers.mode {
                    self.position = processing_position(category);
                }
            }
            WizardEvent::ReadingReady => {
                if matches!(self.screen(), Screen::Processing) {
                    self.position += 1;
                }
            }
            WizardEvent::ReadingFailed => {
                self.position = 0;
            }
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the processing screen in a category's flow.
fn processing_position(category: Category) -> usize {
    flow(category)
        .iter()
        .position(|s| *s == Screen::Processing)
        .unwrap_or(0)
}
