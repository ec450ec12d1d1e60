//! Text normalization: name slugs and currency parsing.

/// Convert a free-text name to a lowercase, hyphen-separated, URL-safe slug.
///
/// Whitespace runs collapse to a single hyphen, anything that is not an
/// ASCII word character or hyphen is stripped, and hyphen runs collapse
/// to one. Total and idempotent.
pub fn to_slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;

    for c in lowered.trim().chars() {
        let mapped = if c.is_whitespace() || c == '-' {
            Some('-')
        } else if c.is_ascii_alphanumeric() || c == '_' {
            Some(c)
        } else {
            None
        };

        if let Some(m) = mapped {
            if m == '-' {
                if !prev_hyphen {
                    slug.push('-');
                }
                prev_hyphen = true;
            } else {
                slug.push(m);
                prev_hyphen = false;
            }
        }
    }

    slug
}

/// Parse a salary string like "£1,000" or "€50,000.50 per week" to a number.
///
/// Currency symbols and thousands separators are stripped, then the leading
/// decimal prefix is parsed (trailing text is ignored). Unparseable or empty
/// input yields 0.0; this never fails.
pub fn parse_currency_to_number(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '£' | '€' | '$' | ','))
        .collect();

    leading_number(cleaned.trim())
}

/// Parse the longest numeric prefix of `s` ([+-]?digits[.digits]).
fn leading_number(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end == digits_start {
        return 0.0;
    }

    s[..end].parse().unwrap_or(0.0)
}
