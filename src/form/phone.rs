//! Live phone number masking.
//!
//! The mask is recomputed from scratch on every keystroke: the input is reduced
//! to its digits and the digit count alone decides which separators appear.

use crate::i18n::Locale;

/// Grouping rules for one locale's mask.
///
/// Layout: `+<country> (<area>) <exchange>-<subscriber>`, with area and
/// exchange three digits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhoneMask {
    country_code: &'static str,

    /// Longer digit strings are left unformatted
    max_digits: usize,

    /// Digit count at which the hyphen appears
    hyphen_from: usize,
}

/// Kyrgyzstan: `+996 (xxx) xxx-xxx`
const KG_MASK: PhoneMask = PhoneMask {
    country_code: "996",
    max_digits: 12,
    hyphen_from: 9,
};

/// North America: `+1 (xxx) xxx-xxxx`
const NANP_MASK: PhoneMask = PhoneMask {
    country_code: "1",
    max_digits: 11,
    hyphen_from: 8,
};

const GROUP_LEN: usize = 3;

impl PhoneMask {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ru => KG_MASK,
            Locale::En => NANP_MASK,
        }
    }

    /// Format an all-digit string, `None` when the mask doesn't apply.
    fn apply(&self, digits: &str) -> Option<String> {
        if !digits.starts_with(self.country_code) || digits.len() > self.max_digits {
            return None;
        }

        let n = digits.len();
        let area_start = self.country_code.len();
        if n <= area_start {
            return Some(digits.to_string());
        }

        let area_end = n.min(area_start + GROUP_LEN);
        let mut out = format!("+{} ({}", self.country_code, &digits[area_start..area_end]);
        if n == area_end {
            return Some(out);
        }

        let exchange_end = n.min(area_end + GROUP_LEN);
        out.push_str(") ");
        out.push_str(&digits[area_end..exchange_end]);

        if n >= self.hyphen_from {
            out.push('-');
        }
        out.push_str(&digits[exchange_end..]);
        Some(out)
    }
}

/// Apply the locale's country prefix rule to a digit string.
///
/// Russian locale: a leading trunk `0` becomes `996`.
/// English locale: anything not starting with `1` gets a `1`.
fn normalize_prefix(digits: String, locale: Locale) -> String {
    match locale {
        Locale::Ru => match digits.strip_prefix('0') {
            Some(rest) => format!("{}{}", KG_MASK.country_code, rest),
            None => digits,
        },
        Locale::En => {
            if !digits.is_empty() && !digits.starts_with(NANP_MASK.country_code) {
                format!("{}{}", NANP_MASK.country_code, digits)
            } else {
                digits
            }
        }
    }
}

/// Format raw phone field input with the mask of `locale`.
///
/// Non-digits are discarded first. Digit strings the mask doesn't cover
/// (wrong country code, too long) come back as bare digits.
pub fn format_phone_input(raw: &str, locale: Locale) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = normalize_prefix(digits, locale);

    match PhoneMask::for_locale(locale).apply(&digits) {
        Some(formatted) => formatted,
        None => digits,
    }
}
