//! The Answer Set — everything the user has told us so far.
//!
//! Created empty at session start, mutated field-by-field as the wizard
//! advances, serialized wholesale into the reading prompt. Held in memory
//! only; nothing here survives the process.

use serde::{Deserialize, Serialize};

/// The two mutually exclusive reading categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Two-subject romantic-compatibility reading.
    Love,
    /// Single-subject career/wealth reading.
    Money,
}

/// Identity field collected per subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    Other,
    #[serde(rename = "Prefer not")]
    PreferNot,
}

/// Birth-time sentinel used when the user skips the time field.
pub const TIME_UNKNOWN: &str = "unknown";

/// Biographical fields for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    pub name: String,
    /// Composite `YYYY-MM-DD` string, rebuilt on every part edit. Parts may
    /// be blank while the user is still typing (`"1990--12"` is a valid
    /// intermediate state; readiness filters it).
    pub birth_date: String,
    /// `HH:00` or [`TIME_UNKNOWN`].
    pub birth_time: String,
    pub gender: Gender,
}

impl SubjectRecord {
    /// Declared defaults for the primary subject.
    pub fn primary_default() -> Self {
        Self {
            name: String::new(),
            birth_date: String::new(),
            birth_time: TIME_UNKNOWN.to_string(),
            gender: Gender::M,
        }
    }

    /// Declared defaults for the secondary subject.
    pub fn partner_default() -> Self {
        Self {
            name: String::new(),
            birth_date: String::new(),
            birth_time: TIME_UNKNOWN.to_string(),
            gender: Gender::F,
        }
    }

    /// Split the composite date into (year, month, day) parts.
    ///
    /// Missing separators yield empty parts, never an error.
    pub fn date_parts(&self) -> (String, String, String) {
        let mut it = self.birth_date.splitn(3, '-');
        let y = it.next().unwrap_or("").to_string();
        let m = it.next().unwrap_or("").to_string();
        let d = it.next().unwrap_or("").to_string();
        (y, m, d)
    }

    /// Replace one date part and rebuild the composite string.
    ///
    /// Year and day inputs are normalized (see [`clean_year`] / [`clean_day`]);
    /// month is stored as given (the UI only offers valid values).
    pub fn set_date_part(&mut self, part: DatePart, value: &str) {
        let (y, m, d) = self.date_parts();
        let (y, m, d) = match part {
            DatePart::Year => (clean_year(value), m, d),
            DatePart::Month => (y, value.to_string(), d),
            DatePart::Day => (y, m, clean_day(value)),
        };
        self.birth_date = format!("{y}-{m}-{d}");
    }

    /// True once this subject's screen may advance: trimmed name non-empty,
    /// 4-digit year, non-empty month and day. Time and identity are
    /// default-filled and never block.
    pub fn is_ready(&self) -> bool {
        let (y, m, d) = self.date_parts();
        !self.name.trim().is_empty() && y.len() == 4 && !m.is_empty() && !d.is_empty()
    }
}

/// Which part of the composite birth date an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

/// Strip non-digits and truncate to 4 characters.
pub fn clean_year(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .collect()
}

/// Strip non-digits, truncate to 2 characters, cap at 31, floor at 1.
///
/// An empty result stays empty — the floor only applies once the user has
/// typed something.
pub fn clean_day(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(2)
        .collect();
    if digits.is_empty() {
        return digits;
    }
    match digits.parse::<u32>() {
        Ok(n) if n > 31 => "31".to_string(),
        Ok(n) if n < 1 => "1".to_string(),
        _ => digits,
    }
}

/// Accumulated answers for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    pub mode: Option<Category>,
    pub user: SubjectRecord,
    /// Present only for the two-subject category, and only once
    /// [`AnswerSet::ensure_partner`] has been called.
    pub partner: Option<SubjectRecord>,
    /// Situational context for the love reading.
    pub relationship_status: String,
    /// Situational context for the money reading.
    pub occupation: String,
    pub final_question: String,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self {
            mode: None,
            user: SubjectRecord::primary_default(),
            partner: None,
            relationship_status: String::new(),
            occupation: String::new(),
            final_question: String::new(),
        }
    }

    /// Construct the secondary subject record with its declared defaults if
    /// it does not exist yet, and return it for editing.
    ///
    /// This is the only way the partner record comes into existence — field
    /// setters never create it as a side effect.
    pub fn ensure_partner(&mut self) -> &mut SubjectRecord {
        self.partner
            .get_or_insert_with(SubjectRecord::partner_default)
    }

    /// The situational-context field for the selected category.
    pub fn context_mut(&mut self) -> &mut String {
        match self.mode {
            Some(Category::Love) => &mut self.relationship_status,
            _ => &mut self.occupation,
        }
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_input_is_clamped() {
        assert_eq!(clean_day("99"), "31");
        assert_eq!(clean_day("0"), "1");
        assert_eq!(clean_day("15"), "15");
        assert_eq!(clean_day(""), "");
        assert_eq!(clean_day("3a1"), "31");
    }

    #[test]
    fn year_input_is_digits_only_max_four() {
        assert_eq!(clean_year("1990"), "1990");
        assert_eq!(clean_year("19901"), "1990");
        assert_eq!(clean_year("19x9"), "199");
        assert_eq!(clean_year(""), "");
    }

    #[test]
    fn date_parts_survive_blank_components() {
        let mut s = SubjectRecord::primary_default();
        s.set_date_part(DatePart::Day, "12");
        assert_eq!(s.birth_date, "--12");
        s.set_date_part(DatePart::Year, "1990");
        s.set_date_part(DatePart::Month, "05");
        assert_eq!(s.birth_date, "1990-05-12");
    }

    #[test]
    fn readiness_table() {
        let full = |name: &str, date: &str| {
            let mut s = SubjectRecord::primary_default();
            s.name = name.to_string();
            s.birth_date = date.to_string();
            s
        };
        assert!(!full("", "1990-05-12").is_ready());
        assert!(!full("   ", "1990-05-12").is_ready());
        assert!(!full("A", "990-05-12").is_ready());
        assert!(!full("A", "1990-05-").is_ready());
        assert!(!full("A", "1990--12").is_ready());
        assert!(full("A", "1990-05-12").is_ready());
    }

    #[test]
    fn partner_is_created_only_explicitly() {
        let mut answers = AnswerSet::new();
        assert!(answers.partner.is_none());

        let partner = answers.ensure_partner();
        assert_eq!(partner.gender, Gender::F);
        assert_eq!(partner.birth_time, TIME_UNKNOWN);

        partner.name = "B".to_string();
        // Second call must not reset the record.
        assert_eq!(answers.ensure_partner().name, "B");
    }

    #[test]
    fn answer_set_serializes_with_wire_names() {
        let answers = AnswerSet::new();
        let v = serde_json::to_value(&answers).unwrap();
        assert!(v["mode"].is_null());
        assert_eq!(v["user"]["birthTime"], "unknown");
        assert_eq!(v["finalQuestion"], "");
    }
}
