//! Datatype detectors.
//!
//! Each detector inspects the baseline and target fragments of a difference
//! and either declines or returns the positional leeway it recommends. The
//! detectors run in a fixed order and the first one to accept wins; a
//! difference nothing accepts is a [`DifferenceDatatype::String`] with no
//! leeway.

use tracing::trace;
use uuid::Uuid;

use crate::datatype::DifferenceDatatype;

/// Extra leeway granted to numeric differences on top of the length delta.
///
/// The diff locator can shift the start of a numeric difference by a digit or
/// so depending on which leading digits the two values happen to share.
pub const NUMERIC_BOUNDARY_LEEWAY: usize = 2;

/// Hex digits in a GUID once wrappers and hyphens are removed.
pub const GUID_HEX_DIGITS: usize = 32;

/// Shortest fragment still considered a GUID candidate.
pub const GUID_MIN_LEN: usize = 28;

/// Longest fragment still considered a GUID candidate: 32 digits, 4 hyphens
/// and a pair of braces or parentheses.
pub const GUID_MAX_LEN: usize = 38;

type Detector = fn(&str, &str) -> Option<usize>;

/// Detectors in priority order. Integer must precede Decimal, since every
/// integer also parses as a float.
const DETECTORS: [(DifferenceDatatype, Detector); 3] = [
    (DifferenceDatatype::Integer, integer_leeway),
    (DifferenceDatatype::Decimal, decimal_leeway),
    (DifferenceDatatype::Guid, guid_leeway),
];

/// Classify a pair of differing fragments.
///
/// Returns the most specific datatype both fragments belong to along with the
/// leeway that datatype recommends. Never fails.
pub fn classify(baseline: &str, target: &str) -> (DifferenceDatatype, usize) {
    for (datatype, detect) in DETECTORS {
        match detect(baseline, target) {
            Some(leeway) => return (datatype, leeway),
            None => trace!(%datatype, "detector declined"),
        }
    }
    (DifferenceDatatype::String, 0)
}

fn integer_leeway(baseline: &str, target: &str) -> Option<usize> {
    (parses_as_integer(baseline) && parses_as_integer(target))
        .then(|| numeric_leeway(baseline, target))
}

fn decimal_leeway(baseline: &str, target: &str) -> Option<usize> {
    (parses_as_decimal(baseline) && parses_as_decimal(target))
        .then(|| numeric_leeway(baseline, target))
}

fn guid_leeway(baseline: &str, target: &str) -> Option<usize> {
    let baseline_padding = almost_guid_padding(baseline)?;
    let target_padding = almost_guid_padding(target)?;
    Some(baseline_padding.max(target_padding))
}

fn numeric_leeway(baseline: &str, target: &str) -> usize {
    char_len(baseline).abs_diff(char_len(target)) + NUMERIC_BOUNDARY_LEEWAY
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Whitespace a numeric fragment may be surrounded by.
fn is_numeric_padding(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}

/// A signed 32-bit decimal integer: optional sign, digits only.
fn parses_as_integer(s: &str) -> bool {
    s.trim_matches(is_numeric_padding).parse::<i32>().is_ok()
}

/// A general floating-point number.
///
/// Thousands separators are accepted in the integral part, as long as at
/// least one digit precedes the first of them. Non-finite values are only
/// accepted in their symbolic spelling, see [`is_non_finite_symbol`].
fn parses_as_decimal(s: &str) -> bool {
    let s = s.trim_matches(is_numeric_padding);
    if !s.chars().all(is_decimal_char) {
        return is_non_finite_symbol(s);
    }

    let integral_end = s.find(['.', 'e', 'E']).unwrap_or(s.len());
    let (integral, rest) = s.split_at(integral_end);

    if integral.trim_start_matches(['+', '-']).starts_with(',') {
        return false;
    }

    let mut normalized: String = integral.chars().filter(|&c| c != ',').collect();
    normalized.push_str(rest);
    normalized.parse::<f64>().is_ok()
}

fn is_decimal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E' | ',')
}

/// An optionally signed `Infinity`, `NaN` (any case) or `∞`. Shorter
/// spellings such as `inf` are not numbers.
fn is_non_finite_symbol(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned == "∞"
        || unsigned.eq_ignore_ascii_case("Infinity")
        || unsigned.eq_ignore_ascii_case("NaN")
}

/// Check whether `candidate` is a GUID, allowing for a few characters the
/// diff locator may have left outside the difference.
///
/// Two different GUIDs that share leading or trailing characters produce a
/// difference that excludes those characters, so the fragment is padded back
/// out to a full GUID before parsing. Returns the number of padding
/// characters needed, or `None` when the fragment cannot be a GUID.
pub fn almost_guid_padding(candidate: &str) -> Option<usize> {
    let len = char_len(candidate);
    if !(GUID_MIN_LEN..=GUID_MAX_LEN).contains(&len) {
        return None;
    }

    let unwrapped = candidate.strip_prefix(['{', '(']).unwrap_or(candidate);
    let unwrapped = unwrapped.strip_suffix(['}', ')']).unwrap_or(unwrapped);

    let mut digits: String = unwrapped.chars().filter(|&c| c != '-').collect();
    let digit_count = char_len(&digits);
    if digit_count > GUID_HEX_DIGITS {
        return None;
    }

    let padding = GUID_HEX_DIGITS - digit_count;
    digits.extend(std::iter::repeat('0').take(padding));

    Uuid::parse_str(&digits).ok().map(|_| padding)
}
