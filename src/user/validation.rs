//! Declarative validation pipeline for incoming user records.
//!
//! Rules are plain data: an ordered list of (field, predicate, message)
//! descriptors. A validation pass evaluates every rule and collects the
//! message of each one that fails, in declaration order, so a client sees
//! all problems in a single round trip.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::models::User;

/// A single field-level or cross-field rule.
///
/// The predicate is pure: it reads the candidate record and nothing else.
/// It returns `true` when the record passes the rule.
struct Rule {
    field: &'static str,
    message: String,
    check: Box<dyn Fn(&User) -> bool + Send + Sync>,
}

/// Accessor for one field of the candidate record.
type Field = fn(&User) -> Option<&str>;

static RULES: Lazy<Vec<Rule>> = Lazy::new(rules);

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate a candidate record against every declared rule.
///
/// Returns the failure messages in rule-declaration order; an empty list
/// means the record is valid. Never touches the store.
pub fn validate(user: &User) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| {
            let passed = (rule.check)(user);
            if !passed {
                debug!(field = rule.field, "validation rule failed");
            }
            !passed
        })
        .map(|rule| rule.message.clone())
        .collect()
}

/// The rule list, in the order violations are reported.
fn rules() -> Vec<Rule> {
    vec![
        required("name", |u| u.name.as_deref()),
        required("email", |u| u.email.as_deref()),
        format(
            "email",
            r#"Please provide a valid email address for "email""#,
            |u| u.email.as_deref(),
            is_valid_email,
        ),
        required("birthday", |u| u.birthday.as_deref()),
        format(
            "birthday",
            r#"Please provide a valid date for "birthday""#,
            |u| u.birthday.as_deref(),
            is_iso_date,
        ),
        required("password", |u| u.password.as_deref()),
        format(
            "password",
            r#"Please provide a value for "password" that is between 8 and 20 characters in length"#,
            |u| u.password.as_deref(),
            is_valid_password_length,
        ),
        required("passwordConfirmation", |u| u.password_confirmation.as_deref()),
        confirmation_matches(),
    ]
}

/// The field must carry a non-empty value. Absent, `null`, and `""` all
/// count as missing.
fn required(field: &'static str, get: Field) -> Rule {
    Rule {
        field,
        message: format!(r#"Please provide a value for "{field}""#),
        check: Box::new(move |user: &User| value(get(user)).is_some()),
    }
}

/// The field's value must satisfy `valid` when one is present. Missing
/// values pass; the required rule already reports those.
fn format(field: &'static str, message: &str, get: Field, valid: fn(&str) -> bool) -> Rule {
    Rule {
        field,
        message: message.to_string(),
        check: Box::new(move |user: &User| value(get(user)).is_none_or(valid)),
    }
}

/// Cross-field rule: when both password fields are present they must be
/// equal. With either side missing the required rule reports it instead.
fn confirmation_matches() -> Rule {
    Rule {
        field: "passwordConfirmation",
        message: r#"Please provide values for "password" and "passwordConfirmation" that match"#
            .to_string(),
        check: Box::new(|user: &User| {
            match (
                value(user.password.as_deref()),
                value(user.password_confirmation.as_deref()),
            ) {
                (Some(password), Some(confirmation)) => password == confirmation,
                _ => true,
            }
        }),
    }
}

/// Normalize a field to its effective value: `None` for absent or empty.
fn value(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.is_empty())
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn is_iso_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

fn is_valid_password_length(password: &str) -> bool {
    (8..=20).contains(&password.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(body: serde_json::Value) -> User {
        serde_json::from_value(body).unwrap()
    }

    fn valid_user() -> User {
        user(serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "birthday": "1815-12-10",
            "password": "difference-engine",
            "passwordConfirmation": "difference-engine",
        }))
    }

    #[test]
    fn test_valid_record_has_no_violations() {
        assert!(validate(&valid_user()).is_empty());
    }

    #[test]
    fn test_empty_record_reports_every_required_field() {
        let violations = validate(&user(serde_json::json!({})));
        assert_eq!(
            violations,
            [
                r#"Please provide a value for "name""#,
                r#"Please provide a value for "email""#,
                r#"Please provide a value for "birthday""#,
                r#"Please provide a value for "password""#,
                r#"Please provide a value for "passwordConfirmation""#,
            ]
        );
    }

    #[test]
    fn test_null_and_empty_string_count_as_missing() {
        let candidate = user(serde_json::json!({
            "name": null,
            "email": "",
            "birthday": "1815-12-10",
            "password": "difference-engine",
            "passwordConfirmation": "difference-engine",
        }));
        let violations = validate(&candidate);
        assert_eq!(
            violations,
            [
                r#"Please provide a value for "name""#,
                r#"Please provide a value for "email""#,
            ]
        );
    }

    #[test]
    fn test_invalid_email_reports_only_the_format_message() {
        let mut candidate = valid_user();
        candidate.email = Some("not-an-email".to_string());
        assert_eq!(
            validate(&candidate),
            [r#"Please provide a valid email address for "email""#]
        );
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@sub.domain.com"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_birthday_must_be_an_iso_date() {
        let mut candidate = valid_user();
        candidate.birthday = Some("12/10/1815".to_string());
        assert_eq!(
            validate(&candidate),
            [r#"Please provide a valid date for "birthday""#]
        );

        candidate.birthday = Some("1815-13-41".to_string());
        assert_eq!(
            validate(&candidate),
            [r#"Please provide a valid date for "birthday""#]
        );
    }

    #[test]
    fn test_short_password_with_matching_confirmation() {
        let mut candidate = valid_user();
        candidate.password = Some("short".to_string());
        candidate.password_confirmation = Some("short".to_string());
        assert_eq!(
            validate(&candidate),
            [r#"Please provide a value for "password" that is between 8 and 20 characters in length"#]
        );
    }

    #[test]
    fn test_password_length_bounds_are_inclusive() {
        for length in [8, 20] {
            let password = "a".repeat(length);
            let mut candidate = valid_user();
            candidate.password = Some(password.clone());
            candidate.password_confirmation = Some(password);
            assert!(validate(&candidate).is_empty(), "length {length} should pass");
        }

        for length in [7, 21] {
            let password = "a".repeat(length);
            let mut candidate = valid_user();
            candidate.password = Some(password.clone());
            candidate.password_confirmation = Some(password);
            assert_eq!(validate(&candidate).len(), 1, "length {length} should fail");
        }
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut candidate = valid_user();
        candidate.password = Some("abcdefgh".to_string());
        candidate.password_confirmation = Some("abcdefgi".to_string());
        assert_eq!(
            validate(&candidate),
            [r#"Please provide values for "password" and "passwordConfirmation" that match"#]
        );
    }

    #[test]
    fn test_match_rule_skips_when_either_side_is_missing() {
        let mut candidate = valid_user();
        candidate.password_confirmation = None;
        assert_eq!(
            validate(&candidate),
            [r#"Please provide a value for "passwordConfirmation""#]
        );

        let mut candidate = valid_user();
        candidate.password = None;
        assert_eq!(
            validate(&candidate),
            [r#"Please provide a value for "password""#]
        );
    }

    #[test]
    fn test_violations_follow_rule_declaration_order() {
        let candidate = user(serde_json::json!({
            "name": "Ada Lovelace",
            "email": "not-an-email",
            "birthday": "someday",
            "password": "abcdefgh",
            "passwordConfirmation": "abcdefgi",
        }));
        assert_eq!(
            validate(&candidate),
            [
                r#"Please provide a valid email address for "email""#,
                r#"Please provide a valid date for "birthday""#,
                r#"Please provide values for "password" and "passwordConfirmation" that match"#,
            ]
        );
    }

    #[test]
    fn test_validation_is_repeatable() {
        let candidate = user(serde_json::json!({ "email": "not-an-email" }));
        assert_eq!(validate(&candidate), validate(&candidate));
    }
}
