//! Locale-dependent number formatting and name ordering.
//!
//! # Responsibility
//! - Map a BCP-47 style tag to the number/collation conventions the core
//!   supports.
//! - Format rounded quantities with the locale's separators.
//! - Provide a stable, accent-insensitive ordering for ingredient and recipe
//!   names.
//!
//! # Invariants
//! - Unknown or malformed tags fall back to `DEFAULT_LOCALE_TAG`.
//! - Ordering is total: ties on the folded key break on the raw string.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

/// Locale used when the caller does not pass one.
pub const DEFAULT_LOCALE_TAG: &str = "nl-NL";

static LOCALE_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:[-_][A-Za-z0-9]{2,8})*$").expect("valid locale tag regex")
});

/// Number and collation conventions supported by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// `1.234,5`
    #[default]
    Dutch,
    /// `1,234.5`
    English,
}

impl Locale {
    /// Parses a locale tag such as `nl-NL`, `en_US` or `en`.
    pub fn parse(tag: &str) -> Self {
        let Some(caps) = LOCALE_TAG_RE.captures(tag.trim()) else {
            return Self::default();
        };
        match caps[1].to_ascii_lowercase().as_str() {
            "en" => Self::English,
            _ => Self::Dutch,
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            Self::Dutch => ',',
            Self::English => '.',
        }
    }

    pub fn group_separator(self) -> char {
        match self {
            Self::Dutch => '.',
            Self::English => ',',
        }
    }

    /// Formats `value` with at most `max_fraction_digits` fraction digits.
    ///
    /// Trailing zero fraction digits are dropped and the integer part is
    /// grouped per thousand.
    pub fn format_number(self, value: f64, max_fraction_digits: usize) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let fixed = format!("{:.*}", max_fraction_digits, value);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };
        let (negative, digits) = match int_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, int_part),
        };

        let mut out = String::with_capacity(fixed.len() + digits.len() / 3);
        if negative && (digits.chars().any(|c| c != '0') || !frac_part.is_empty()) {
            out.push('-');
        }
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                out.push(self.group_separator());
            }
            out.push(digit);
        }
        if !frac_part.is_empty() {
            out.push(self.decimal_separator());
            out.push_str(frac_part);
        }
        out
    }

    /// Orders two display names the way the shopping list shows them.
    pub fn compare_names(self, left: &str, right: &str) -> Ordering {
        collation_key(left)
            .cmp(&collation_key(right))
            .then_with(|| left.cmp(right))
    }
}

fn collation_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;
    use std::cmp::Ordering;

    #[test]
    fn parse_maps_tags_and_falls_back() {
        assert_eq!(Locale::parse("en-US"), Locale::English);
        assert_eq!(Locale::parse("EN_gb"), Locale::English);
        assert_eq!(Locale::parse("nl-BE"), Locale::Dutch);
        assert_eq!(Locale::parse("not a locale!"), Locale::Dutch);
        assert_eq!(Locale::parse(""), Locale::Dutch);
    }

    #[test]
    fn format_number_uses_locale_separators() {
        assert_eq!(Locale::Dutch.format_number(1.5, 1), "1,5");
        assert_eq!(Locale::English.format_number(1.5, 1), "1.5");
        assert_eq!(Locale::Dutch.format_number(1250.0, 0), "1.250");
        assert_eq!(Locale::English.format_number(1234567.25, 2), "1,234,567.25");
        assert_eq!(Locale::Dutch.format_number(2.0, 3), "2");
        assert_eq!(Locale::Dutch.format_number(0.25, 3), "0,25");
        assert_eq!(Locale::Dutch.format_number(f64::NAN, 1), "0");
    }

    #[test]
    fn compare_names_ignores_case_and_accents() {
        assert_eq!(Locale::Dutch.compare_names("appel", "Banaan"), Ordering::Less);
        assert_eq!(Locale::Dutch.compare_names("Éclair", "ei"), Ordering::Less);
        assert_ne!(Locale::Dutch.compare_names("Ui", "ui"), Ordering::Equal);
    }
}
