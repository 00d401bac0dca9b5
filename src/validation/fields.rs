//! Per-field predicates for the payment form.
//!
//! All of them are total: malformed input yields `false`, never a panic.

use chrono::{Datelike, NaiveDate};

const CARD_DIGITS: usize = 16;
const CARD_GROUP: usize = 4;
const CVV_DIGITS: usize = 3;

fn all_ascii_digits(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_digit())
}

/// 16 digits, contiguous or as `0000 0000 0000 0000`.
pub fn is_valid_card_number(raw: &str) -> bool {
    if raw.len() == CARD_DIGITS {
        return all_ascii_digits(raw);
    }

    let groups: Vec<&str> = raw.split(' ').collect();
    groups.len() == CARD_DIGITS / CARD_GROUP
        && groups
            .iter()
            .all(|g| g.len() == CARD_GROUP && all_ascii_digits(g))
}

/// Letters and spaces only, with at least one letter.
pub fn is_valid_name(raw: &str) -> bool {
    raw.chars().any(char::is_alphabetic) && raw.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// `(month, two-digit year)` for a well-formed `MM/YY`.
fn parse_expiration(raw: &str) -> Option<(u32, u32)> {
    let (month, year) = raw.split_once('/')?;
    if month.len() != 2 || year.len() != 2 || !all_ascii_digits(month) || !all_ascii_digits(year)
    {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: u32 = year.parse().ok()?;
    (1..=12).contains(&month).then_some((month, year))
}

/// `MM/YY` with `MM` between `01` and `12`. No clock involved.
pub fn is_valid_card_expiration_date(raw: &str) -> bool {
    parse_expiration(raw).is_some()
}

/// Whether a card expiring at `raw` can still be charged on `today`.
///
/// Cards stay valid through the last day of their expiry month, and `YY`
/// is read as `20YY`. Malformed dates are never unexpired.
pub fn is_unexpired(raw: &str, today: NaiveDate) -> bool {
    let Some((month, year)) = parse_expiration(raw) else {
        return false;
    };
    let year = 2000 + year as i32;
    (year, month) >= (today.year(), today.month())
}

/// Exactly three digits.
pub fn is_valid_cvv(raw: &str) -> bool {
    raw.len() == CVV_DIGITS && all_ascii_digits(raw)
}
