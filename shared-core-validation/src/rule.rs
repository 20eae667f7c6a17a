//! Rule model and the declaration grammar.
//!
//! A declaration is a comma separated list of rules; `=` separates a rule
//! name from its single parameter:
//!
//! ```text
//! required,min=2,max=50,pattern=^[a-z_]+$
//! ```
//!
//! Rule names are resolved once into [`Rule`], so evaluation is an
//! exhaustive `match` rather than a string lookup.

use std::fmt;

use regex::Regex;
use shared_core_validation_grammar::{check_rules, parse_declaration, RuleSpec};

use crate::error::RuleSpecError;

pub use shared_core_validation_grammar::{split_declaration, PARAM_SEPARATOR, RULE_SEPARATOR};

/// A single resolved rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    Min(i64),
    Max(i64),
    Email,
    Url,
    Pattern(Pattern),
    /// Unrecognised rule name. Kept so that it fails at validation time.
    Unknown(String),
}

impl Rule {
    /// Resolve a `(name, parameter)` pair.
    ///
    /// `min` and `max` require an integer parameter; a missing or malformed
    /// parameter is rejected here instead of silently becoming `0`.
    pub fn from_parts(name: &str, param: &str) -> Result<Self, RuleSpecError> {
        RuleSpec::from_parts(name, param).map(Rule::from)
    }

    /// Declared name of the rule.
    pub fn name(&self) -> &str {
        match self {
            Rule::Required => "required",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Email => "email",
            Rule::Url => "url",
            Rule::Pattern(_) => "pattern",
            Rule::Unknown(name) => name,
        }
    }
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        match spec {
            RuleSpec::Required => Rule::Required,
            RuleSpec::Min(n) => Rule::Min(n),
            RuleSpec::Max(n) => Rule::Max(n),
            RuleSpec::Email => Rule::Email,
            RuleSpec::Url => Rule::Url,
            RuleSpec::Pattern(source) => Rule::Pattern(Pattern::new(source)),
            RuleSpec::Unknown(name) => Rule::Unknown(name),
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Rule::Required, Rule::Required)
            | (Rule::Email, Rule::Email)
            | (Rule::Url, Rule::Url) => true,
            (Rule::Min(a), Rule::Min(b)) | (Rule::Max(a), Rule::Max(b)) => a == b,
            (Rule::Pattern(a), Rule::Pattern(b)) => a.as_str() == b.as_str(),
            (Rule::Unknown(a), Rule::Unknown(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Min(n) | Rule::Max(n) => write!(f, "{}={}", self.name(), n),
            Rule::Pattern(p) => write!(f, "pattern={}", p.as_str()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Parse a full declaration into resolved rules, in declaration order.
///
/// Runs the same checks as `#[derive(Validate)]`: an empty declaration, a
/// malformed `min`/`max`, a repeated rule other than `pattern` and `min`
/// above `max` are all errors.
pub fn parse_rules(declaration: &str) -> Result<Vec<Rule>, RuleSpecError> {
    let specs = parse_declaration(declaration)?;
    check_rules(&specs)?;
    Ok(specs.into_iter().map(Rule::from).collect())
}

/// A `pattern` parameter, compiled once when the rule is built.
///
/// Compilation errors are kept rather than raised: an unparsable expression
/// is reported as a violation of the field it is attached to.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    compiled: Result<Regex, regex::Error>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = Regex::new(&source);
        Self { source, compiled }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> Result<&Regex, &regex::Error> {
        self.compiled.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_equals_separates() {
        let rules = parse_rules("pattern=^a=b$").unwrap();
        assert_eq!(rules, vec![Rule::Pattern(Pattern::new("^a=b$"))]);
    }

    #[test]
    fn resolves_known_and_unknown_rules() {
        let rules = parse_rules("required,email,url,unknown_rule").unwrap();
        assert_eq!(
            rules,
            vec![
                Rule::Required,
                Rule::Email,
                Rule::Url,
                Rule::Unknown("unknown_rule".into())
            ]
        );
    }

    #[test]
    fn malformed_bound_is_rejected() {
        let err = parse_rules("min=abc").unwrap_err();
        assert!(matches!(
            err,
            RuleSpecError::InvalidParameter { ref rule, ref param } if rule == "min" && param == "abc"
        ));

        let err = parse_rules("required,max").unwrap_err();
        assert_eq!(
            err,
            RuleSpecError::MissingParameter {
                rule: "max".into()
            }
        );
    }

    #[test]
    fn incoherent_declarations_are_rejected() {
        assert_eq!(
            parse_rules("min=10,max=5").unwrap_err(),
            RuleSpecError::ConflictingBounds { min: 10, max: 5 }
        );
        assert_eq!(
            parse_rules("email,required,email").unwrap_err(),
            RuleSpecError::Repeated {
                rule: "email".into()
            }
        );
        assert_eq!(parse_rules(" , ").unwrap_err(), RuleSpecError::Empty);
    }

    #[test]
    fn repeated_patterns_are_kept_in_order() {
        let rules = parse_rules("pattern=[0-9],pattern=[a-z]").unwrap();
        assert_eq!(
            rules,
            vec![
                Rule::Pattern(Pattern::new("[0-9]")),
                Rule::Pattern(Pattern::new("[a-z]"))
            ]
        );
    }

    #[test]
    fn negative_bounds_are_accepted() {
        assert_eq!(parse_rules("min=-5").unwrap(), vec![Rule::Min(-5)]);
    }

    #[test]
    fn display_round_trips_declaration_syntax() {
        let rendered: Vec<String> = parse_rules("required,min=3,pattern=^x$")
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, vec!["required", "min=3", "pattern=^x$"]);
    }

    #[test]
    fn invalid_pattern_is_kept_for_reporting() {
        let pattern = Pattern::new("([a-z");
        assert!(pattern.regex().is_err());
        assert_eq!(pattern.as_str(), "([a-z");
    }
}
