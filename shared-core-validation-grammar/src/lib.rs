//! Rule declaration grammar shared by `shared-core-validation` and its
//! derive macro.
//!
//! A declaration is a comma separated list of rules; the first `=` of a rule
//! separates its name from its single parameter:
//!
//! ```text
//! required,min=2,max=50,pattern=^[a-z_]+$
//! ```
//!
//! [`parse_declaration`] resolves the rule names and their parameters;
//! [`check_rules`] rejects combinations that cannot mean anything. Both the
//! derive (at compile time) and explicit schema registration (at runtime)
//! run the two steps, so a declaration is accepted or refused the same way
//! on either path.

use thiserror::Error;

/// Separator between rules in a declaration.
pub const RULE_SEPARATOR: char = ',';
/// Separator between a rule name and its parameter.
pub const PARAM_SEPARATOR: char = '=';

/// A rule with its parameter resolved, before any runtime state (compiled
/// regexes) is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    Required,
    Min(i64),
    Max(i64),
    Email,
    Url,
    Pattern(String),
    /// Unrecognised name. Accepted here; the validator reports it.
    Unknown(String),
}

impl RuleSpec {
    /// Resolve a `(name, parameter)` pair.
    pub fn from_parts(name: &str, param: &str) -> Result<Self, RuleSpecError> {
        let rule = match name {
            "required" => RuleSpec::Required,
            "min" => RuleSpec::Min(parse_bound(name, param)?),
            "max" => RuleSpec::Max(parse_bound(name, param)?),
            "email" => RuleSpec::Email,
            "url" => RuleSpec::Url,
            "pattern" => RuleSpec::Pattern(param.to_string()),
            other => RuleSpec::Unknown(other.to_string()),
        };
        Ok(rule)
    }

    pub fn name(&self) -> &str {
        match self {
            RuleSpec::Required => "required",
            RuleSpec::Min(_) => "min",
            RuleSpec::Max(_) => "max",
            RuleSpec::Email => "email",
            RuleSpec::Url => "url",
            RuleSpec::Pattern(_) => "pattern",
            RuleSpec::Unknown(name) => name,
        }
    }

    /// `pattern` rules combine as a conjunction; every other known rule
    /// states its whole constraint at once.
    fn repeatable(&self) -> bool {
        matches!(self, RuleSpec::Pattern(_) | RuleSpec::Unknown(_))
    }
}

/// A rule declaration that cannot be turned into rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSpecError {
    #[error("empty rule declaration")]
    Empty,

    #[error("`{rule}` requires an integer parameter, e.g. `{rule}=1`")]
    MissingParameter { rule: String },

    #[error("`{rule}` expects an integer parameter, found `{param}`")]
    InvalidParameter { rule: String, param: String },

    #[error("rule `{rule}` is declared more than once")]
    Repeated { rule: String },

    #[error("`min={min}` is greater than `max={max}`; no value can satisfy both")]
    ConflictingBounds { min: i64, max: i64 },
}

fn parse_bound(rule: &str, param: &str) -> Result<i64, RuleSpecError> {
    let param = param.trim();
    if param.is_empty() {
        return Err(RuleSpecError::MissingParameter {
            rule: rule.to_string(),
        });
    }
    param
        .parse::<i64>()
        .map_err(|_| RuleSpecError::InvalidParameter {
            rule: rule.to_string(),
            param: param.to_string(),
        })
}

/// Split a declaration into `(name, parameter)` pairs without resolving them.
///
/// Whitespace around each rule is trimmed and empty segments are dropped.
/// Only the first `=` separates name from parameter, so parameters may
/// contain `=` themselves. Parameters cannot contain `,`.
pub fn split_declaration(declaration: &str) -> impl Iterator<Item = (&str, &str)> {
    declaration
        .split(RULE_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .split_once(PARAM_SEPARATOR)
                .unwrap_or((segment, ""))
        })
}

/// Resolve every rule of a declaration, in declaration order.
pub fn parse_declaration(declaration: &str) -> Result<Vec<RuleSpec>, RuleSpecError> {
    let rules = split_declaration(declaration)
        .map(|(name, param)| RuleSpec::from_parts(name, param))
        .collect::<Result<Vec<_>, _>>()?;
    if rules.is_empty() {
        return Err(RuleSpecError::Empty);
    }
    Ok(rules)
}

/// Reject rule lists no value could be meant to satisfy: a non-repeatable
/// rule given twice, or `min` above `max`.
pub fn check_rules(rules: &[RuleSpec]) -> Result<(), RuleSpecError> {
    for (idx, rule) in rules.iter().enumerate() {
        if rule.repeatable() {
            continue;
        }
        if rules[..idx].iter().any(|earlier| earlier.name() == rule.name()) {
            return Err(RuleSpecError::Repeated {
                rule: rule.name().to_string(),
            });
        }
    }

    let min = rules.iter().find_map(|r| match r {
        RuleSpec::Min(n) => Some(*n),
        _ => None,
    });
    let max = rules.iter().find_map(|r| match r {
        RuleSpec::Max(n) => Some(*n),
        _ => None,
    });
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(RuleSpecError::ConflictingBounds { min, max });
        }
    }
    Ok(())
}
