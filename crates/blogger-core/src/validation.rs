//! Input validation and normalization for post text, hashtags and ids.
//!
//! The predicates are total: they classify a value and never fail. The
//! `validate_*` functions compose them into the accept/reject rules applied
//! before anything is written to storage.
//!
//! ## Markup encoding
//!
//! Stored text and hashtags have `<` and `>` replaced by `&lt;` and `&gt;`
//! ([`escape_markup`]). Stored values are returned to clients unchanged, so
//! clients must treat them as plain text (the bundled page assigns them via
//! `textContent`) and never decode them back into markup.

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Reasons a request is rejected before reaching storage.
///
/// The `Display` text is the exact message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Post text is required and must be non-empty")]
    PostTextRequired,

    #[error("Hashtag must start with #")]
    HashtagMissingHash,

    #[error("Hashtag must start with a letter after #")]
    HashtagMissingLetter,

    #[error("Hashtag may only contain letters and numbers")]
    HashtagNotAlphanumeric,

    #[error("Parameter id is required")]
    IdRequired,

    #[error("Invalid post id format")]
    InvalidId,
}

/// True unless the value is missing or JSON `null`.
pub fn is_defined(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}

/// True iff the value is a string that is non-empty after trimming.
pub fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

/// True iff every character is an ASCII letter or digit.
///
/// Vacuously true for the empty string.
pub fn is_alphanumeric_ascii(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_alphanumeric())
}

/// True iff the first character is an ASCII letter. False for `""`.
pub fn starts_with_letter(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Replace `<` and `>` with their HTML entities.
pub fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Accept post text and return its stored (escaped) form.
pub fn validate_post_text(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(text)) if is_non_empty_string(value) => Ok(escape_markup(text)),
        _ => Err(ValidationError::PostTextRequired),
    }
}

/// Accept an optional hashtag and return its stored (escaped) form.
///
/// Missing, `null`, `""` and values without a length (numbers, booleans,
/// objects) all mean "no hashtag". Otherwise the rules are checked in order
/// and the first failure is reported: leading `#`, a letter right after it,
/// then letters and digits only.
pub fn validate_hashtag(value: Option<&Value>) -> Result<Option<String>, ValidationError> {
    if !is_defined(value) {
        return Ok(None);
    }

    let tag = match value {
        Some(Value::String(tag)) if !tag.is_empty() => tag,
        // A list has a first element, and it is never the character '#'.
        Some(Value::Array(items)) if !items.is_empty() => {
            return Err(ValidationError::HashtagMissingHash);
        }
        // Empty strings, empty lists, numbers, booleans and objects carry no tag.
        _ => return Ok(None),
    };

    let body = tag
        .strip_prefix('#')
        .ok_or(ValidationError::HashtagMissingHash)?;
    if !starts_with_letter(body) {
        return Err(ValidationError::HashtagMissingLetter);
    }
    if !is_alphanumeric_ascii(body) {
        return Err(ValidationError::HashtagNotAlphanumeric);
    }

    Ok(Some(escape_markup(tag)))
}

/// Parse the id addressed by a delete request.
pub fn parse_post_id(id: Option<&str>) -> Result<Uuid, ValidationError> {
    let id = id.ok_or(ValidationError::IdRequired)?;
    Uuid::parse_str(id).map_err(|_| ValidationError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hashtag(tag: &str) -> Result<Option<String>, ValidationError> {
        validate_hashtag(Some(&json!(tag)))
    }

    #[test]
    fn test_is_defined() {
        assert!(!is_defined(None));
        assert!(!is_defined(Some(&Value::Null)));
        assert!(is_defined(Some(&json!(""))));
        assert!(is_defined(Some(&json!(0))));
        assert!(is_defined(Some(&json!(false))));
    }

    #[test]
    fn test_is_non_empty_string() {
        assert!(is_non_empty_string(Some(&json!("hello"))));
        assert!(is_non_empty_string(Some(&json!("  x  "))));
        assert!(!is_non_empty_string(Some(&json!(""))));
        assert!(!is_non_empty_string(Some(&json!(" \t\n "))));
        assert!(!is_non_empty_string(Some(&json!(42))));
        assert!(!is_non_empty_string(Some(&json!(["text"]))));
        assert!(!is_non_empty_string(Some(&Value::Null)));
        assert!(!is_non_empty_string(None));
    }

    #[test]
    fn test_is_alphanumeric_ascii() {
        assert!(is_alphanumeric_ascii("abcXYZ0189"));
        assert!(is_alphanumeric_ascii("V"));
        assert!(is_alphanumeric_ascii(""));
        assert!(!is_alphanumeric_ascii("a_b"));
        assert!(!is_alphanumeric_ascii("a b"));
        assert!(!is_alphanumeric_ascii("a!"));
        assert!(!is_alphanumeric_ascii("café"));
    }

    #[test]
    fn test_starts_with_letter() {
        assert!(starts_with_letter("a1"));
        assert!(starts_with_letter("Z"));
        assert!(!starts_with_letter(""));
        assert!(!starts_with_letter("1a"));
        assert!(!starts_with_letter("_a"));
        assert!(!starts_with_letter("éa"));
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(escape_markup("a & b"), "a & b");
    }

    #[test]
    fn post_text_is_escaped_but_not_trimmed() {
        assert_eq!(
            validate_post_text(Some(&json!(" <i>x</i> "))).unwrap(),
            " &lt;i&gt;x&lt;/i&gt; "
        );
    }

    #[test]
    fn post_text_must_be_a_non_empty_string() {
        for value in [json!(""), json!("   "), json!(7), Value::Null] {
            assert_eq!(
                validate_post_text(Some(&value)),
                Err(ValidationError::PostTextRequired)
            );
        }
        assert_eq!(validate_post_text(None), Err(ValidationError::PostTextRequired));
    }

    #[test]
    fn hashtag_accepted() {
        assert_eq!(hashtag("#abc").unwrap(), Some("#abc".to_string()));
        assert_eq!(hashtag("#go2").unwrap(), Some("#go2".to_string()));
    }

    #[test]
    fn hashtag_optional() {
        assert_eq!(hashtag("").unwrap(), None);
        assert_eq!(validate_hashtag(None).unwrap(), None);
        assert_eq!(validate_hashtag(Some(&Value::Null)).unwrap(), None);
    }

    #[test]
    fn hashtag_rules_report_first_failure() {
        assert_eq!(hashtag("abc"), Err(ValidationError::HashtagMissingHash));
        assert_eq!(hashtag(" #abc"), Err(ValidationError::HashtagMissingHash));
        assert_eq!(hashtag("#1abc"), Err(ValidationError::HashtagMissingLetter));
        assert_eq!(hashtag("#"), Err(ValidationError::HashtagMissingLetter));
        // "!" would also fail the alphanumeric rule; the letter rule wins.
        assert_eq!(hashtag("#!a"), Err(ValidationError::HashtagMissingLetter));
        assert_eq!(hashtag("#a!b"), Err(ValidationError::HashtagNotAlphanumeric));
        assert_eq!(hashtag("#a<b>"), Err(ValidationError::HashtagNotAlphanumeric));
    }

    #[test]
    fn scalar_and_object_hashtags_are_ignored() {
        for value in [json!(12), json!(true), json!({ "tag": "#abc" }), json!([])] {
            assert_eq!(validate_hashtag(Some(&value)), Ok(None), "{}", value);
        }
    }

    #[test]
    fn list_hashtag_is_rejected() {
        assert_eq!(
            validate_hashtag(Some(&json!(["#abc"]))),
            Err(ValidationError::HashtagMissingHash)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::HashtagMissingHash.to_string(),
            "Hashtag must start with #"
        );
        assert_eq!(
            ValidationError::HashtagMissingLetter.to_string(),
            "Hashtag must start with a letter after #"
        );
        assert_eq!(
            ValidationError::HashtagNotAlphanumeric.to_string(),
            "Hashtag may only contain letters and numbers"
        );
    }

    #[test]
    fn test_parse_post_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_post_id(Some(&id.to_string())), Ok(id));
        assert_eq!(parse_post_id(None), Err(ValidationError::IdRequired));
        assert_eq!(parse_post_id(Some("")), Err(ValidationError::InvalidId));
        assert_eq!(
            parse_post_id(Some("not-an-id")),
            Err(ValidationError::InvalidId)
        );
    }
}
