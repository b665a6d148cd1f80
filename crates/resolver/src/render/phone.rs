//! Phone number formatting.

/// Punctuate North-American numbers for display.
///
/// A `+1` followed by exactly ten digits becomes `+1 XXX.XXX.XXXX`. Every
/// other format, including other country codes and already-punctuated
/// numbers, passes through unchanged.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("+1") else {
        return trimmed.to_owned();
    };

    if rest.len() != 10 || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.to_owned();
    }

    let (area, rest) = rest.split_at(3);
    let (exchange, line) = rest.split_at(3);
    format!("+1 {area}.{exchange}.{line}")
}
