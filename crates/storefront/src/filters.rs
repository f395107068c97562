//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Largest count the nav badge spells out.
const BADGE_MAX: u64 = 9;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Formats a cart item count for the nav badge.
///
/// Usage in templates: `{{ count|badge_count }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn badge_count(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(badge_label(&count.to_string()))
}

/// `"9+"` for counts above nine, the count itself otherwise.
#[must_use]
pub fn badge_label(count: &str) -> String {
    match count.parse::<u64>() {
        Ok(n) if n > BADGE_MAX => format!("{BADGE_MAX}+"),
        _ => count.to_string(),
    }
}
