//! Formatting helpers for presenting insight metadata.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

pub(crate) fn parse_timestamp(iso: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(iso, &Rfc3339).ok()
}

/// Short date badge for cards, e.g. "Mar 14, 2026". Falls back to the date
/// portion of the raw string when parsing fails.
pub fn format_card_date(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(date) => date
            .format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| iso.to_string()),
        None => iso.split('T').next().unwrap_or(iso).to_string(),
    }
}
