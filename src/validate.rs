//! Declarative validation for employee form input.
//!
//! A fixed table maps each field to its validation rules; a draft is valid
//! iff no field produces a violation. Rules other than `Required` pass on
//! empty input so a missing value reports once, not once per rule.

use std::fmt;

use crate::employee::EmployeeDraft;

/// A single validation predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Phone,
}

impl Rule {
    fn check(self, value: &str) -> Option<Violation> {
        match self {
            Rule::Required => value.trim().is_empty().then_some(Violation::Required),
            _ if value.is_empty() => None,
            Rule::MinLength(min) => (value.chars().count() < min)
                .then_some(Violation::MinLength(min)),
            Rule::MaxLength(max) => (value.chars().count() > max)
                .then_some(Violation::MaxLength(max)),
            Rule::Email => (!is_email(value)).then_some(Violation::Email),
            Rule::Phone => (!is_phone(value)).then_some(Violation::Phone),
        }
    }
}

/// Typed reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Phone,
}

/// A violation tagged with the field that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            Violation::Required => write!(f, "{} is required", self.field),
            Violation::MinLength(min) => {
                write!(f, "{}: minimum length is {} characters", self.field, min)
            }
            Violation::MaxLength(max) => {
                write!(f, "{}: maximum length is {} characters", self.field, max)
            }
            Violation::Email => write!(f, "please enter a valid email address"),
            Violation::Phone => write!(f, "please enter a valid phone number"),
        }
    }
}

/// Checks a draft against the field rule table. Returns every violation,
/// in table order, so a form can annotate all fields at once.
pub fn validate_draft(draft: &EmployeeDraft) -> Result<(), Vec<FieldViolation>> {
    let fields: [(&'static str, &str, &[Rule]); 6] = [
        (
            "name",
            &draft.name,
            &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(50)],
        ),
        ("department", &draft.department, &[Rule::Required]),
        ("position", &draft.position, &[Rule::Required]),
        ("email", &draft.email, &[Rule::Required, Rule::Email]),
        ("phone", &draft.phone, &[Rule::Required, Rule::Phone]),
        ("join_date", &draft.join_date, &[Rule::Required]),
    ];

    let mut violations = Vec::new();
    for (field, value, rules) in fields {
        for rule in rules {
            if let Some(violation) = rule.check(value) {
                violations.push(FieldViolation { field, violation });
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Well-formed address: one `@`, a non-empty local part, and a domain with
/// an interior dot. No whitespace anywhere.
fn is_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.len() >= 3
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Permissive international format: optional leading `+`, 7 to 15 digits,
/// with dashes, dots, spaces, and parentheses as separators.
fn is_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let mut digits = 0;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if !matches!(c, '-' | '.' | ' ' | '(' | ')') {
            return false;
        }
    }
    (7..=15).contains(&digits)
}
