//! Owned state of an interactive lookup.
//!
//! The state record holds the current input text, the busy flag and the last
//! outcome. It is passed explicitly to whoever drives lookups; the pipeline
//! functions themselves never see it.
//!
//! ```text
//! idle --submit(valid)--> busy --complete--> idle (last = outcome)
//! idle --submit(invalid)--> idle (rejected, nothing sent)
//! busy --submit--> busy (ignored)
//! ```

use serde::Serialize;

use crate::chart::ChartData;
use crate::errors::ValidationError;
use crate::identifier::{self, Identifier};

/// Result of a finished lookup. A new outcome replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    Found { chart: ChartData },
    Failed { message: String },
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A lookup for this identifier should be sent now.
    Started(Identifier),
    /// A lookup is already in flight; nothing happens.
    Ignored,
    /// The input does not validate; nothing is sent.
    Rejected(ValidationError),
}

#[derive(Debug, Clone, Default)]
pub struct LookupSession {
    input: String,
    busy: bool,
    last: Option<LookupOutcome>,
}

impl LookupSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input text. Stored in display form.
    pub fn edit(&mut self, text: &str) {
        self.input = identifier::format(text);
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub const fn last(&self) -> Option<&LookupOutcome> {
        self.last.as_ref()
    }

    /// Try to start a lookup for the current input.
    pub fn submit(&mut self) -> Submission {
        if self.busy {
            return Submission::Ignored;
        }
        match identifier::validate(&self.input) {
            Ok(id) => {
                self.busy = true;
                Submission::Started(id)
            }
            Err(error) => Submission::Rejected(error),
        }
    }

    /// Record the outcome of the in-flight lookup and clear the busy flag.
    pub fn complete(&mut self, outcome: LookupOutcome) {
        self.busy = false;
        self.last = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_chart() -> ChartData {
        ChartData {
            identification: "20123456786".to_string(),
            display_name: "TEST".to_string(),
            period_axis: Vec::new(),
            series: Vec::new(),
        }
    }

    #[test]
    fn edit_stores_display_form() {
        let mut session = LookupSession::new();
        session.edit("20123456786999");
        assert_eq!(session.input(), "20-12345678-6");
    }

    #[test]
    fn invalid_input_is_rejected_without_going_busy() {
        let mut session = LookupSession::new();
        session.edit("2012");
        assert_eq!(
            session.submit(),
            Submission::Rejected(ValidationError::WrongLength { digits: 4 })
        );
        assert!(!session.is_busy());

        session.edit("20123456785");
        assert_eq!(
            session.submit(),
            Submission::Rejected(ValidationError::BadCheckDigit)
        );
        assert!(!session.is_busy());
    }

    #[test]
    fn duplicate_submit_while_busy_is_ignored() {
        let mut session = LookupSession::new();
        session.edit("20-12345678-6");
        assert!(matches!(session.submit(), Submission::Started(_)));
        assert!(session.is_busy());
        assert_eq!(session.submit(), Submission::Ignored);

        session.complete(LookupOutcome::Found {
            chart: empty_chart(),
        });
        assert!(!session.is_busy());
        assert!(matches!(session.submit(), Submission::Started(_)));
    }

    #[test]
    fn completion_replaces_last_outcome() {
        let mut session = LookupSession::new();
        session.edit("20123456786");
        let _ = session.submit();
        session.complete(LookupOutcome::Found {
            chart: empty_chart(),
        });
        let _ = session.submit();
        session.complete(LookupOutcome::Failed {
            message: "timeout".to_string(),
        });
        assert_eq!(
            session.last(),
            Some(&LookupOutcome::Failed {
                message: "timeout".to_string()
            })
        );
    }
}
