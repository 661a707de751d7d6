//! Input hygiene for strings that arrive from users or storage.
//!
//! ## Summary
//! Everything used as a lookup key passes through [`sanitize_user_input`]
//! first and, for timezone keys, [`validate_timezone`] afterwards.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::constants::MAX_INPUT_LEN;
use crate::error::{CoreError, CoreResult};

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<script[^>]*>.*?</script>"));
static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]*>"));
static JAVASCRIPT_URL: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)javascript:"));
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)on\w+\s*="));
static TIMEZONE_SHAPE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z_]+/[A-Za-z_]+$"));

#[expect(clippy::expect_used, reason = "Patterns are compile-time constants")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid pattern")
}

/// ## Summary
/// Strips script blocks, markup tags, `javascript:` URLs and inline event
/// handler attributes, trims the result and truncates it to 1000 characters.
///
/// Examples:
/// - `"<b>Paris</b>"` -> `"Paris"`
/// - `"x onclick=alert(1)"` -> `"x alert(1)"`
#[must_use]
pub fn sanitize_user_input(input: &str) -> String {
    let stripped = SCRIPT_BLOCK.replace_all(input, "");
    let stripped = MARKUP_TAG.replace_all(&stripped, "");
    let stripped = JAVASCRIPT_URL.replace_all(&stripped, "");
    let stripped = EVENT_HANDLER.replace_all(&stripped, "");

    stripped.trim().chars().take(MAX_INPUT_LEN).collect()
}

/// ## Summary
/// Checks that a string has the `Region/City` shape expected of a timezone key.
#[must_use]
pub fn is_timezone_shaped(candidate: &str) -> bool {
    TIMEZONE_SHAPE.is_match(candidate)
}

/// ## Summary
/// Sanitizes `input` and validates the result as a `Region/City` identifier.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` if the sanitized value is not
/// timezone-shaped.
pub fn validate_timezone(input: &str) -> CoreResult<String> {
    let sanitized = sanitize_user_input(input);
    if is_timezone_shaped(&sanitized) {
        Ok(sanitized)
    } else {
        tracing::debug!(timezone = %input, "Rejected malformed timezone");
        Err(CoreError::InvalidInput(format!(
            "Invalid timezone format: {input}"
        )))
    }
}
