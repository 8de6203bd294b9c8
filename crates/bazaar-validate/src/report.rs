//! Validation report types.
//!
//! A validation pass produces one immutable [`ValidationReport`] per form
//! submission: a field-to-message map plus an overall validity flag. Field
//! checks return [`FieldOutcome`] values which a [`ReportBuilder`] accumulates;
//! nothing mutates shared state across checks, and every field of an aggregate
//! is always recorded so simultaneous failures all surface their messages.

use std::collections::BTreeMap;

use serde::Serialize;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Field passed its rule.
    Pass,
    /// Field failed with a user-facing message.
    Fail(String),
    /// Field failed without a message (blank required payment fields).
    FailSilent,
}

impl FieldOutcome {
    /// Build a failure from a static message.
    pub fn fail(message: &str) -> Self {
        Self::Fail(message.to_string())
    }

    /// Whether the field passed.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The message to show for this field (empty on pass or silent failure).
    pub fn message(&self) -> &str {
        match self {
            Self::Fail(message) => message,
            Self::Pass | Self::FailSilent => "",
        }
    }
}

/// Result of one aggregate validation pass.
///
/// Read-only once built; a fresh report is produced for every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    is_valid: bool,
    fields: BTreeMap<&'static str, String>,
}

impl ValidationReport {
    /// Whether every constituent field passed its rule.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Message for a field; empty string means no error.
    pub fn message(&self, field: &str) -> &str {
        self.fields.get(field).map_or("", String::as_str)
    }

    /// Whether a field carries a non-empty error message.
    pub fn has_message(&self, field: &str) -> bool {
        !self.message(field).is_empty()
    }

    /// All recorded fields with their messages.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(name, message)| (*name, message.as_str()))
    }
}

/// Accumulates per-field outcomes for one validation pass.
#[derive(Debug)]
pub struct ReportBuilder {
    all_passed: bool,
    fields: BTreeMap<&'static str, String>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            all_passed: true,
            fields: BTreeMap::new(),
        }
    }

    /// Record the outcome for a field.
    pub fn field(mut self, name: &'static str, outcome: FieldOutcome) -> Self {
        let (passed, message) = match outcome {
            FieldOutcome::Pass => (true, String::new()),
            FieldOutcome::Fail(message) => (false, message),
            FieldOutcome::FailSilent => (false, String::new()),
        };
        self.all_passed &= passed;
        self.fields.insert(name, message);
        self
    }

    /// Record a field excluded from this pass by a discriminator; it is
    /// present in the report with no message and does not affect validity.
    pub fn exclude(mut self, name: &'static str) -> Self {
        self.fields.insert(name, String::new());
        self
    }

    /// AND a bare condition into validity without a field entry
    /// (cross-field constraints such as a price range).
    pub fn require(mut self, ok: bool) -> Self {
        self.all_passed &= ok;
        self
    }

    pub fn build(self) -> ValidationReport {
        ValidationReport {
            is_valid: self.all_passed,
            fields: self.fields,
        }
    }
}
