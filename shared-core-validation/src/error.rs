use std::fmt;
use std::ops::Deref;

/// A rule declaration that cannot be turned into [`Rule`](crate::Rule)s.
pub use shared_core_validation_grammar::RuleSpecError;

/// Outcome of a failed [`validate`](crate::FieldValidator::validate) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The caller handed over an absent record (`None`).
    #[error("validation target cannot be nil")]
    NilTarget,
    /// The caller handed over a value that is not a record.
    #[error("validation target must be a struct, got {kind}")]
    NotAStruct { kind: &'static str },
    /// At least one rule failed. Violations are kept in field declaration
    /// order, then rule declaration order.
    #[error("validation failed: {0}")]
    Failed(Violations),
}

impl ValidationError {
    /// Violations carried by the error; empty for `NilTarget` / `NotAStruct`.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationError::Failed(violations) => violations,
            _ => &[],
        }
    }
}

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("unknown validation rule: {rule}")]
    UnknownRule { field: String, rule: String },

    #[error("field '{field}' must be a string for {} validation", label(.rule))]
    TypeMismatch {
        field: String,
        rule: &'static str,
        found: &'static str,
    },

    #[error("field '{field}' {expectation}")]
    RuleViolation {
        field: String,
        rule: &'static str,
        expectation: String,
    },

    #[error("invalid pattern for field '{field}': {cause}")]
    InvalidPatternSpec { field: String, cause: String },
}

impl Violation {
    /// Name of the field the violation was raised for.
    pub fn field(&self) -> &str {
        match self {
            Violation::UnknownRule { field, .. }
            | Violation::TypeMismatch { field, .. }
            | Violation::RuleViolation { field, .. }
            | Violation::InvalidPatternSpec { field, .. } => field,
        }
    }
}

fn label(rule: &str) -> &str {
    match rule {
        "url" => "URL",
        other => other,
    }
}

/// Ordered, non-empty list of violations collected during one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    /// Human readable messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl Deref for Violations {
    type Target = [Violation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, violation) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Errors raised while registering fields on a [`SchemaBuilder`](crate::SchemaBuilder).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid rule declaration on field '{field}': {source}")]
    InvalidDeclaration {
        field: String,
        #[source]
        source: RuleSpecError,
    },

    #[error("field '{field}' is registered more than once")]
    DuplicateField { field: String },
}
