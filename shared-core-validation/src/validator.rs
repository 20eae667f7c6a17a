//! The validation engine.

use tracing::{debug, trace};

use crate::error::{ValidationError, Violation, Violations};
use crate::rule::Rule;
use crate::schema::{Field, Fields, Visibility};
use crate::target::{IntoTarget, Target};
use crate::value::FieldValue;

/// Validates records.
///
/// Object safe so that services can hold a `Box<dyn Validator>`; the
/// generic entry point lives on [`ValidatorExt`].
pub trait Validator: Send + Sync {
    fn validate_target(&self, target: Target<'_>) -> Result<(), ValidationError>;
}

/// Generic convenience on top of [`Validator`].
pub trait ValidatorExt: Validator {
    fn validate<T: IntoTarget + ?Sized>(&self, data: &T) -> Result<(), ValidationError> {
        self.validate_target(data.target())
    }
}

impl<V: Validator + ?Sized> ValidatorExt for V {}

/// Default, stateless rule engine.
///
/// Evaluates every rule of every public, rule-bearing field and folds all
/// failures into a single [`ValidationError::Failed`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldValidator;

impl FieldValidator {
    pub const fn new() -> Self {
        Self
    }

    /// Validate `data`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NilTarget`] when `data` is an absent record;
    /// - [`ValidationError::NotAStruct`] when `data` is not a record;
    /// - [`ValidationError::Failed`] with every violation otherwise.
    pub fn validate<T: IntoTarget + ?Sized>(&self, data: &T) -> Result<(), ValidationError> {
        self.validate_target(data.target())
    }

    /// Validate a record behind a trait object.
    pub fn validate_record(&self, record: &dyn Fields) -> Result<(), ValidationError> {
        let type_name = record.type_name();
        let mut violations = Vec::new();

        for field in record.fields() {
            if !is_checked(&field) {
                continue;
            }
            trace!(record = type_name, field = field.name, rules = field.rules.len(), "evaluating field");
            violations.extend(evaluate_field(field.name, field.rules, field.value).violations);
        }

        if violations.is_empty() {
            return Ok(());
        }
        debug!(record = type_name, violations = violations.len(), "validation failed");
        Err(ValidationError::Failed(Violations::new(violations)))
    }
}

impl Validator for FieldValidator {
    fn validate_target(&self, target: Target<'_>) -> Result<(), ValidationError> {
        match target {
            Target::Record(record) => self.validate_record(record),
            Target::Nil => Err(ValidationError::NilTarget),
            Target::Scalar(kind) => Err(ValidationError::NotAStruct { kind }),
        }
    }
}

fn is_checked(field: &Field<'_>) -> bool {
    field.visibility == Visibility::Public && !field.rules.is_empty()
}

/// Result of evaluating all rules of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOutcome {
    pub violations: Vec<Violation>,
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluate `rules` in order against `value`.
///
/// Rules do not short-circuit each other. The exception is an unknown rule
/// name: the meaning of the declaration can no longer be established, so
/// only the unknown-rule failure is reported for that field.
pub fn evaluate_field(name: &str, rules: &[Rule], value: FieldValue<'_>) -> FieldOutcome {
    if let Some(unknown) = rules.iter().find(|r| matches!(r, Rule::Unknown(_))) {
        return FieldOutcome {
            violations: unknown.check(name, value).err().into_iter().collect(),
        };
    }
    FieldOutcome {
        violations: rules
            .iter()
            .filter_map(|rule| rule.check(name, value).err())
            .collect(),
    }
}
