//! Rule evaluators.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Violation;
use crate::rule::{Pattern, Rule};
use crate::value::FieldValue;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url regex is valid"));

impl Rule {
    /// Evaluate this rule against the value of `field`.
    pub fn check(&self, field: &str, value: FieldValue<'_>) -> Result<(), Violation> {
        match self {
            Rule::Required => required(field, value),
            Rule::Min(limit) => bound(field, value, *limit, Bound::Min),
            Rule::Max(limit) => bound(field, value, *limit, Bound::Max),
            Rule::Email => email(field, value),
            Rule::Url => url(field, value),
            Rule::Pattern(pattern) => matches_pattern(field, value, pattern),
            Rule::Unknown(name) => Err(Violation::UnknownRule {
                field: field.to_string(),
                rule: name.clone(),
            }),
        }
    }
}

fn violation(field: &str, rule: &'static str, expectation: String) -> Violation {
    Violation::RuleViolation {
        field: field.to_string(),
        rule,
        expectation,
    }
}

fn required(field: &str, value: FieldValue<'_>) -> Result<(), Violation> {
    let missing = match value {
        FieldValue::Text(text) => text.is_empty(),
        FieldValue::Sequence(len) | FieldValue::Mapping(len) => len == 0,
        FieldValue::Nullable(present) => !present,
        // Integers, nested records and opaque values always satisfy `required`.
        FieldValue::Integer(_) | FieldValue::Record | FieldValue::Other => false,
    };
    if missing {
        return Err(violation(field, "required", "is required".to_string()));
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
}

impl Bound {
    fn rule(self) -> &'static str {
        match self {
            Bound::Min => "min",
            Bound::Max => "max",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Bound::Min => "at least",
            Bound::Max => "at most",
        }
    }

    fn holds(self, actual: i128, limit: i64) -> bool {
        match self {
            Bound::Min => actual >= i128::from(limit),
            Bound::Max => actual <= i128::from(limit),
        }
    }
}

fn bound(field: &str, value: FieldValue<'_>, limit: i64, bound: Bound) -> Result<(), Violation> {
    let (actual, expectation) = match value {
        FieldValue::Text(text) => (
            text.chars().count() as i128,
            format!("must be {} {} characters", bound.phrase(), limit),
        ),
        FieldValue::Sequence(len) | FieldValue::Mapping(len) => (
            len as i128,
            format!("must have {} {} items", bound.phrase(), limit),
        ),
        FieldValue::Integer(n) => (n, format!("must be {} {}", bound.phrase(), limit)),
        FieldValue::Nullable(_) | FieldValue::Record | FieldValue::Other => return Ok(()),
    };
    if bound.holds(actual, limit) {
        Ok(())
    } else {
        Err(violation(field, bound.rule(), expectation))
    }
}

fn text<'a>(field: &str, rule: &'static str, value: FieldValue<'a>) -> Result<&'a str, Violation> {
    match value {
        FieldValue::Text(text) => Ok(text),
        other => Err(Violation::TypeMismatch {
            field: field.to_string(),
            rule,
            found: other.kind(),
        }),
    }
}

fn email(field: &str, value: FieldValue<'_>) -> Result<(), Violation> {
    let text = text(field, "email", value)?;
    if !EMAIL_REGEX.is_match(text) {
        return Err(violation(
            field,
            "email",
            "must be a valid email address".to_string(),
        ));
    }
    Ok(())
}

fn url(field: &str, value: FieldValue<'_>) -> Result<(), Violation> {
    let text = text(field, "url", value)?;
    // An empty URL is treated as "not provided"; combine with `required` to forbid it.
    if text.is_empty() {
        return Ok(());
    }
    if !URL_REGEX.is_match(text) {
        return Err(violation(field, "url", "must be a valid URL".to_string()));
    }
    Ok(())
}

fn matches_pattern(field: &str, value: FieldValue<'_>, pattern: &Pattern) -> Result<(), Violation> {
    let text = text(field, "pattern", value)?;
    let regex = pattern
        .regex()
        .map_err(|e| Violation::InvalidPatternSpec {
            field: field.to_string(),
            cause: e.to_string(),
        })?;
    if !regex.is_match(text) {
        return Err(violation(
            field,
            "pattern",
            "does not match required pattern".to_string(),
        ));
    }
    Ok(())
}
