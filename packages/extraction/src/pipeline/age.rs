//! Relative-age normalization ("4 hours ago" → 240).

use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// A unit keyword and how many minutes one unit is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRule {
    pub keyword: &'static str,
    pub minutes: u64,
}

/// Unit rules in precedence order. The first keyword found anywhere in the
/// text decides the unit. Seconds, weeks, months and years are not listed
/// and therefore normalize to 0.
pub const UNIT_RULES: &[UnitRule] = &[
    UnitRule {
        keyword: "minute",
        minutes: 1,
    },
    UnitRule {
        keyword: "hour",
        minutes: 60,
    },
    UnitRule {
        keyword: "day",
        minutes: 60 * 24,
    },
];

/// Convert a relative age into whole minutes.
///
/// The value is the first run of ASCII digits in `text`; the unit comes from
/// [`UNIT_RULES`]. Text without digits or without a known unit yields 0.
/// Numbers too large for `u64` saturate.
pub fn normalize_age(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }

    let Some(digits) = DIGITS.find(text) else {
        return 0;
    };
    let value: u64 = digits.as_str().parse().unwrap_or(u64::MAX);

    UNIT_RULES
        .iter()
        .find(|rule| text.contains(rule.keyword))
        .map_or(0, |rule| value.saturating_mul(rule.minutes))
}
