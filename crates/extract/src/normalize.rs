// ABOUTME: Field normalization for the portal's irregular cell text.
// ABOUTME: Identifier marker stripping, compact digit-string dates, and currency parsing.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{ExtractError, Result};

/// Parses a listing identifier, stripping any non-digit marker characters.
///
/// The portal decorates some identifiers with a marker (e.g. `"1234*"`);
/// only the digits are meaningful. Text with no digits at all fails.
pub fn parse_listing_id(raw: &str) -> Result<u32> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse()
        .map_err(|_| ExtractError::field("id", raw.trim()))
}

/// Parses the portal's compact date encoding into a UTC timestamp.
///
/// The source renders dates as `YYYYMM` followed by a day fragment that may
/// carry a line break and a trailing annotation (`"20240310\nMon"`). The
/// first four characters are the year, the next two the month, and the
/// remainder up to the first line break the day. The portal publishes no
/// timezone, so the digits are taken as the canonical UTC date.
pub fn parse_compact_date(raw: &str, field: &'static str) -> Result<DateTime<Utc>> {
    let text = raw.trim();
    let err = || ExtractError::field(field, text);

    let year: i32 = text.get(0..4).and_then(|s| s.parse().ok()).ok_or_else(err)?;
    let month: u32 = text.get(4..6).and_then(|s| s.parse().ok()).ok_or_else(err)?;
    let day: u32 = text
        .get(6..)
        .and_then(|rest| rest.split(['\n', '\r']).next())
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(err)?;

    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(err)
}

/// Parses a monetary cell, treating an empty cell as absent.
///
/// Currency punctuation (`$`, thousands `,`) is stripped before parsing.
/// `""` means the field was never filled in, which is distinct from zero.
pub fn parse_money(raw: &str, field: &'static str) -> Result<Option<f64>> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ExtractError::field(field, text))
}

/// Parses a monetary cell that the column layout requires to be present.
pub fn parse_required_money(raw: &str, field: &'static str) -> Result<f64> {
    parse_money(raw, field)?.ok_or_else(|| ExtractError::field(field, raw.trim()))
}
